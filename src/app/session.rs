use crate::app::commands::{Command, HELP};
use crate::app::export;
use crate::core::estimator::Estimator;
use crate::core::settings::SettingsChange;
use crate::domain::model::{FieldUpdate, ItemId, Quote, Unit};
use crate::domain::ports::Presenter;
use crate::domain::profile::UnitProfile;
use crate::utils::error::{EstimatorError, Result};
use std::io::{BufRead, Write};

/// 把每一列與總價寫成純文字的呈現層
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_item(&mut self, quote: &Quote, unit: Unit) -> Result<()> {
        writeln!(
            self.out,
            "#{:<3} {} x {} x {}  area {} ({}²)  ${}",
            quote.id, quote.width, quote.height, quote.count, quote.display_area, unit, quote.price
        )?;
        Ok(())
    }

    fn remove_item(&mut self, id: ItemId) -> Result<()> {
        writeln!(self.out, "#{} removed", id)?;
        Ok(())
    }

    fn relabel_unit(&mut self, profile: &UnitProfile) -> Result<()> {
        writeln!(
            self.out,
            "unit: {}  width {}  height {}",
            profile.unit,
            profile.width_label(),
            profile.height_label()
        )?;
        Ok(())
    }

    fn render_total(&mut self, total: Option<u64>) -> Result<()> {
        if let Some(total) = total {
            writeln!(self.out, "Final price: $ {}", total)?;
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

/// 互動式 session：一行一個指令，依到達順序逐一處理
pub struct Session<P: Presenter> {
    estimator: Estimator,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    pub fn new(estimator: Estimator, presenter: P) -> Self {
        Self {
            estimator,
            presenter,
        }
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_parts(self) -> (Estimator, P) {
        (self.estimator, self.presenter)
    }

    /// 讀到 EOF 或 quit 為止
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", line, e);
                    self.presenter.message(&format!(
                        "{} ({})",
                        e.user_friendly_message(),
                        e.recovery_suggestion()
                    ))?;
                }
            }
        }
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add => {
                let quote = self.estimator.add_item();
                self.render_quote(&quote)?;
                self.render_total()?;
            }
            Command::Remove(id) => {
                if self.estimator.remove_item(id) {
                    self.presenter.remove_item(id)?;
                } else {
                    let e = EstimatorError::ItemNotFound { id: id.0 };
                    self.presenter.message(&e.user_friendly_message())?;
                }
                self.render_total()?;
            }
            Command::Set {
                id,
                field,
                raw_value,
            } => match self.estimator.update_field(id, field, &raw_value) {
                FieldUpdate::NotANumber => {
                    let current = self
                        .estimator
                        .item(id)
                        .map(|item| item.get(field).to_string())
                        .unwrap_or_default();
                    self.presenter.message(&format!(
                        "'{}' is not a number, {} stays {}",
                        raw_value, field, current
                    ))?;
                }
                FieldUpdate::UnknownItem => {
                    let e = EstimatorError::ItemNotFound { id: id.0 };
                    self.presenter.message(&e.user_friendly_message())?;
                }
                FieldUpdate::Clamped { .. } | FieldUpdate::Applied(_) => {
                    if let Some(quote) = self.estimator.quote(id) {
                        self.render_quote(&quote)?;
                    }
                    self.render_total()?;
                }
            },
            Command::Unit(unit) => {
                if let SettingsChange::UnitChanged { .. } = self.estimator.set_unit(unit) {
                    self.presenter.relabel_unit(self.estimator.profile())?;
                    self.render_all()?;
                }
            }
            Command::Tier(tier) => {
                if self.estimator.set_tier(tier).is_changed() {
                    self.presenter.message(&format!("tier: {}", tier))?;
                    self.render_all()?;
                }
            }
            Command::List => self.render_all()?,
            Command::Total => {
                let total = self.estimator.visible_total();
                if total.is_none() {
                    self.presenter.message("No items yet")?;
                }
                self.presenter.render_total(total)?;
            }
            Command::Bounds => self.presenter.relabel_unit(self.estimator.profile())?,
            Command::Clear => {
                self.estimator.clear();
                self.presenter.message("All items removed")?;
            }
            Command::Export(format) => {
                let body = export::render(&self.estimator, format)?;
                self.presenter.message(body.trim_end())?;
            }
            Command::Help => self.presenter.message(HELP)?,
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    fn render_quote(&mut self, quote: &Quote) -> Result<()> {
        self.presenter
            .render_item(quote, self.estimator.settings().unit)
    }

    fn render_all(&mut self) -> Result<()> {
        let unit = self.estimator.settings().unit;
        for quote in self.estimator.quotes() {
            self.presenter.render_item(&quote, unit)?;
        }
        self.render_total()
    }

    fn render_total(&mut self) -> Result<()> {
        self.presenter.render_total(self.estimator.visible_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Settings;
    use crate::domain::model::Tier;

    fn run_script(settings: Settings, script: &str) -> (Estimator, String) {
        let presenter = TerminalPresenter::new(Vec::new());
        let mut session = Session::new(Estimator::new(settings), presenter);
        session.run(script.as_bytes()).unwrap();
        let (estimator, presenter) = session.into_parts();
        (estimator, String::from_utf8(presenter.into_inner()).unwrap())
    }

    #[test]
    fn test_add_renders_row_and_total() {
        let (estimator, output) = run_script(Settings::default(), "add\n");
        assert_eq!(estimator.len(), 1);
        assert!(output.contains("#1   60 x 60 x 1  area 3.6 (m²)  $151"));
        assert!(output.contains("Final price: $ 151"));
    }

    #[test]
    fn test_bad_input_does_not_stop_session() {
        let (estimator, output) = run_script(
            Settings::default(),
            "add\nset 1 width abc\nfrobnicate\nset 1 width 100\n",
        );
        assert!(output.contains("'abc' is not a number, width stays 60"));
        assert!(output.contains("frobnicate"));
        assert_eq!(estimator.quotes()[0].width, 100.0);
    }

    #[test]
    fn test_quit_stops_processing() {
        let (estimator, _) = run_script(Settings::default(), "add\nquit\nadd\n");
        assert_eq!(estimator.len(), 1);
    }

    #[test]
    fn test_redundant_unit_change_renders_nothing() {
        let (_, output) = run_script(Settings::new(Unit::Imperial, Tier::Standard), "unit ft\n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_removing_last_item_hides_total() {
        let (estimator, output) = run_script(Settings::default(), "add\nrm 1\nrm 1\ntotal\n");
        assert!(estimator.is_empty());
        assert!(output.contains("#1 removed"));
        assert!(output.contains("找不到項目 #1"));
        assert!(output.contains("No items yet"));
        assert_eq!(output.matches("Final price").count(), 1);
    }
}
