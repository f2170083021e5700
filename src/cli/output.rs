use crate::cli::CliError;
use crate::cli::OutputFormat;
use crate::report::{Cell, ReportTable, SceneReport};
use colored::Colorize;
use comfy_table::{presets, Color, Table};
use serde::Serialize;

/// Output formatter for CLI results
pub struct OutputFormatter {
    format: OutputFormat,
    no_color: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self { format, no_color }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format and print data
    pub fn print<T: Serialize + TableDisplay>(&self, data: &T) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Table => self.print_table(data),
            OutputFormat::Json => self.print_json(data),
            OutputFormat::Csv => self.print_csv(data),
        }
    }

    /// Print a message with appropriate formatting
    pub fn print_message(&self, message: &str, message_type: MessageType) {
        let formatted_message = match message_type {
            MessageType::Info => message.blue(),
            MessageType::Success => message.green(),
        };

        if self.no_color {
            println!("{}", message);
        } else {
            println!("{}", formatted_message);
        }
    }

    fn print_table<T: Serialize + TableDisplay>(&self, data: &T) -> Result<(), CliError> {
        let color = !self.no_color && should_use_color();
        for (index, (title, table)) in data.to_tables(color).into_iter().enumerate() {
            if index > 0 {
                println!();
            }
            if let Some(title) = title {
                if color {
                    println!("{}", title.bold());
                } else {
                    println!("{}", title);
                }
            }
            println!("{}", table);
        }
        Ok(())
    }

    pub fn print_json<T: Serialize>(&self, data: &T) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(data).map_err(|e| -> CliError { e.into() })?;
        println!("{}", json);
        Ok(())
    }

    fn print_csv<T: Serialize + TableDisplay>(&self, data: &T) -> Result<(), CliError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(std::io::stdout());
        data.to_csv(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Message type for colored output
pub enum MessageType {
    Info,
    Success,
}

/// Trait for types that can be displayed as tables
pub trait TableDisplay {
    /// Tables to print, each with an optional heading
    fn to_tables(&self, color: bool) -> Vec<(Option<String>, Table)>;
    fn to_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), CliError>;
}

/// Create a new table with consistent styling
pub fn create_table(header: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(header.to_vec());
    table
}

/// Helper macro to create table rows
#[macro_export]
macro_rules! table_row {
    ($table:expr, $($cell:expr),* $(,)?) => {
        $table.add_row(vec![$($cell.to_string()),*]);
    };
}

impl TableDisplay for ReportTable {
    fn to_tables(&self, color: bool) -> Vec<(Option<String>, Table)> {
        let mut table = create_table(&self.header);
        for row in &self.rows {
            table.add_row(row.iter().map(|cell| table_cell(cell, color)));
        }
        vec![(Some(self.title.clone()), table)]
    }

    fn to_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), CliError> {
        writer.write_record([self.title.as_str()])?;
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::display))?;
        }
        Ok(())
    }
}

impl TableDisplay for SceneReport {
    fn to_tables(&self, color: bool) -> Vec<(Option<String>, Table)> {
        let mut tables = Vec::with_capacity(self.tables.len() + 1);
        let mut heading = create_table(&["scene".to_string(), "version".to_string(), "profile".to_string()]);
        table_row!(heading, self.title, self.version, self.profile);
        tables.push((None, heading));
        for table in &self.tables {
            tables.extend(table.to_tables(color));
        }
        tables
    }

    fn to_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), CliError> {
        writer.write_record([self.title.as_str(), self.version.as_str(), self.profile.as_str()])?;
        for table in &self.tables {
            table.to_csv(writer)?;
        }
        Ok(())
    }
}

fn table_cell(cell: &Cell, color: bool) -> comfy_table::Cell {
    let out = comfy_table::Cell::new(cell.display());
    if !color {
        return out;
    }
    match cell.color().and_then(scene_color) {
        Some((c, true)) => out.bg(c).fg(Color::Black),
        Some((c, false)) => out.fg(c),
        None => out,
    }
}

/// Maps a scene colour code to a terminal colour and whether it is inverted.
///
/// Full-size consoles write mnemonic codes (`RD`, `GNi`), rack mixers write
/// the numeric index (0-7 normal, 8-15 inverted).
pub fn scene_color(code: &str) -> Option<(Color, bool)> {
    const PALETTE: [&str; 8] = ["OFF", "RD", "GN", "YE", "BL", "MG", "CY", "WH"];

    let (base, inverted) = match code.parse::<usize>() {
        Ok(index) if index < 16 => (PALETTE[index % 8], index >= 8),
        Ok(_) => return None,
        Err(_) => match code.strip_suffix('i') {
            Some(base) => (base, true),
            None => (code, false),
        },
    };

    let color = match base {
        "RD" => Color::Red,
        "GN" => Color::Green,
        "YE" => Color::Yellow,
        "BL" => Color::Blue,
        "MG" => Color::Magenta,
        "CY" => Color::Cyan,
        "WH" => Color::White,
        _ => return None,
    };
    Some((color, inverted))
}

/// Check if colors should be used
pub fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err() && colored::control::SHOULD_COLORIZE.should_colorize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_color_codes() {
        assert_eq!(scene_color("RD"), Some((Color::Red, false)));
        assert_eq!(scene_color("GNi"), Some((Color::Green, true)));
        assert_eq!(scene_color("OFF"), None);
        assert_eq!(scene_color("3"), Some((Color::Yellow, false)));
        assert_eq!(scene_color("12"), Some((Color::Blue, true)));
        assert_eq!(scene_color("99"), None);
    }

    #[test]
    fn test_report_table_csv() {
        let mut table = ReportTable::new("Bus", &["ch", "link", "name"]);
        table.push_row(vec!["01".into(), true.into(), "Mon".into()]);
        table.push_row(vec!["02".into(), false.into(), "Mon".into()]);

        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
        table.to_csv(&mut writer).unwrap();
        writer.flush().unwrap();
        let out = String::from_utf8(writer.get_ref().clone()).unwrap();
        assert_eq!(out, "Bus\nch,link,name\n01,\u{2713},Mon\n02,,Mon\n");
    }

    #[test]
    fn test_report_table_renders_glyphs() {
        let mut table = ReportTable::new("Bus", &["ch", "dyn"]);
        table.push_row(vec!["01".into(), true.into()]);
        let tables = table.to_tables(false);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].0.as_deref(), Some("Bus"));
        assert!(tables[0].1.to_string().contains('\u{2713}'));
    }
}
