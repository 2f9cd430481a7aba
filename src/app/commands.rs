use crate::app::export::ExportFormat;
use crate::domain::model::{Field, ItemId, Tier, Unit};
use crate::utils::error::{EstimatorError, Result};

pub const HELP: &str = "\
Commands:
  add                             add a row with the minimum size
  rm <id>                         remove a row
  set <id> <width|height|count> <value>
  unit <m|ft>                     switch measurement unit
  tier <standard|light>           switch product tier
  list                            show all rows
  total                           show the final price
  bounds                          show min/max for the active unit
  clear                           remove every row
  export <json|csv>               print the estimate
  help                            show this message
  quit                            leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add,
    Remove(ItemId),
    Set {
        id: ItemId,
        field: Field,
        raw_value: String,
    },
    Unit(Unit),
    Tier(Tier),
    List,
    Total,
    Bounds,
    Clear,
    Export(ExportFormat),
    Help,
    Quit,
    Empty,
}

impl Command {
    /// 解析一行輸入；數值本身不在這裡檢查，交給核心判斷
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<&str> = parts.collect();

        let command = match (keyword.to_lowercase().as_str(), args.as_slice()) {
            ("add" | "+", []) => Command::Add,
            ("rm" | "remove" | "delete", [id]) => Command::Remove(parse_id(id)?),
            ("set", [id, field, rest @ ..]) => Command::Set {
                id: parse_id(id)?,
                field: field.parse()?,
                raw_value: rest.join(" "),
            },
            ("unit", [unit]) => Command::Unit(unit.parse()?),
            ("tier" | "version", [tier]) => Command::Tier(tier.parse()?),
            ("list" | "ls", []) => Command::List,
            ("total", []) => Command::Total,
            ("bounds", []) => Command::Bounds,
            ("clear", []) => Command::Clear,
            ("export", [format]) => Command::Export(format.parse()?),
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            (other, _) => {
                return Err(EstimatorError::unknown_token("command", other));
            }
        };

        Ok(command)
    }
}

fn parse_id(raw: &str) -> Result<ItemId> {
    raw.trim_start_matches('#')
        .parse::<u64>()
        .map(ItemId)
        .map_err(|_| EstimatorError::unknown_token("item id", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("add").unwrap(), Command::Add);
        assert_eq!(Command::parse("  LIST ").unwrap(), Command::List);
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("export csv").unwrap(),
            Command::Export(ExportFormat::Csv)
        );
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(Command::parse("rm 3").unwrap(), Command::Remove(ItemId(3)));
        assert_eq!(Command::parse("rm #3").unwrap(), Command::Remove(ItemId(3)));
        assert!(Command::parse("rm x").is_err());
        assert!(Command::parse("rm").is_err());
    }

    #[test]
    fn test_parse_set_keeps_raw_value() {
        assert_eq!(
            Command::parse("set 1 width 120.5").unwrap(),
            Command::Set {
                id: ItemId(1),
                field: Field::Width,
                raw_value: "120.5".to_string()
            }
        );
        // 非數字也照樣傳給核心，由核心拒絕
        assert_eq!(
            Command::parse("set 2 h abc").unwrap(),
            Command::Set {
                id: ItemId(2),
                field: Field::Height,
                raw_value: "abc".to_string()
            }
        );
        assert_eq!(
            Command::parse("set 2 count").unwrap(),
            Command::Set {
                id: ItemId(2),
                field: Field::Count,
                raw_value: String::new()
            }
        );
        assert!(Command::parse("set 2 depth 10").is_err());
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!(Command::parse("unit ft").unwrap(), Command::Unit(Unit::Imperial));
        assert_eq!(Command::parse("tier light").unwrap(), Command::Tier(Tier::Light));
        assert_eq!(
            Command::parse("version standart").unwrap(),
            Command::Tier(Tier::Standard)
        );
        assert!(Command::parse("unit yard").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }
}
