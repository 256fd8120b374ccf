use super::BlasiusShooting::{BlasiusError, BlasiusSolution};
use super::blasius_config::BlasiusConfig;
use crate::Utils::plots::{PlotSettings, plot_profiles};
use crate::Utils::save_to_file::save_profiles_to_table;
use std::path::Path;

impl From<&BlasiusConfig> for PlotSettings {
    fn from(config: &BlasiusConfig) -> Self {
        Self {
            x_bounds: config.plot_x_bounds,
            y_bounds: config.plot_y_bounds,
            size: config.plot_size,
        }
    }
}

impl BlasiusSolution {
    ////////////////////////////////////////////////I/O/////////////////////////////////////////////////////
    pub fn plot<P: AsRef<Path>>(&self, path: P, settings: &PlotSettings) -> Result<(), BlasiusError> {
        plot_profiles(
            path,
            self.x.as_slice(),
            self.f.as_slice(),
            self.g.as_slice(),
            self.h.as_slice(),
            settings,
        )
    }

    pub fn save_to_table<P: AsRef<Path>>(&self, path: P) -> Result<(), BlasiusError> {
        save_profiles_to_table(
            path,
            self.x.as_slice(),
            self.f.as_slice(),
            self.g.as_slice(),
            self.h.as_slice(),
        )
    }

    /// Writes the table and the plot named in `config`.
    pub fn save_outputs(&self, config: &BlasiusConfig) -> Result<(), BlasiusError> {
        self.save_to_table(&config.table_file)?;
        self.plot(&config.plot_file, &PlotSettings::from(config))
    }

    ////////////////////////PRETTY PRINTING/////////////////////////////
    pub fn pretty_print(&self) {
        use prettytable::{Table, row};

        println!("\n=== BLASIUS SOLUTION ===");
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value"]);
        table.add_row(row!["Grid points", self.len()]);
        table.add_row(row!["x far", format!("{}", self.x[self.len() - 1])]);
        table.add_row(row!["Iterations", self.iterations]);
        table.add_row(row!["Wall shear h(0)", format!("{:.8}", self.h0)]);
        table.add_row(row!["g far", format!("{:.10}", self.g_far)]);
        table.add_row(row!["|1 - g far|", format!("{:.3e}", self.error)]);
        table.add_row(row!["Final dh", format!("{:.3e}", self.final_dh)]);
        table.printstd();
    }

    /// Last `last` passes of the shooting loop.
    pub fn pretty_print_history(&self, last: usize) {
        use prettytable::{Cell, Row, Table, row};

        println!("____________________SHOOTING HISTORY_________________________");
        let mut table = Table::new();
        table.add_row(row!["Iteration", "h0", "dh", "g far", "error"]);
        let skip = self.history.len().saturating_sub(last);
        for step in self.history.iter().skip(skip) {
            table.add_row(Row::new(vec![
                Cell::new(&step.iteration.to_string()),
                Cell::new(&format!("{:.10}", step.h0)),
                Cell::new(&format!("{:.3e}", step.dh)),
                Cell::new(&format!("{:.10}", step.g_far)),
                Cell::new(&format!("{:.3e}", step.error)),
            ]));
        }
        table.printstd();
    }
}
