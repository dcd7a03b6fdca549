use chrono::{DateTime, Local, NaiveDate, TimeZone};
use scorebook_types::{ExportError, Play};
use serde::{Deserialize, Serialize};
use tracing::info;

const CSV_HEADERS: [&str; 6] = ["Date", "Time", "Player", "Action", "Team", "Points"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    /// CSV content under a spreadsheet filename; spreadsheet apps open it as-is.
    Xlsx,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Txt => "text/plain",
        }
    }

    pub fn filename(&self, date: NaiveDate) -> String {
        format!("playbyplay_{}.{}", date.format("%Y-%m-%d"), self.extension())
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "xlsx" => Some(ExportFormat::Xlsx),
            "txt" | "text" => Some(ExportFormat::Txt),
            _ => None,
        }
    }
}

/// One play flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub date: String,
    pub time: String,
    pub player: String,
    pub action: String,
    pub team: String,
    pub points: u32,
}

impl ExportRow {
    pub fn from_play<Tz: TimeZone>(play: &Play, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let at: DateTime<Tz> = play.timestamp.with_timezone(tz);
        Self {
            date: at.format("%m/%d/%Y").to_string(),
            time: at.format("%H:%M:%S").to_string(),
            player: play.player_name.clone(),
            action: play.action().to_string(),
            team: play.side.label().to_string(),
            points: play.points,
        }
    }

    pub fn to_text_line(&self) -> String {
        let mut line = format!(
            "{} {} - {} ({}): {}",
            self.date, self.time, self.player, self.team, self.action
        );
        if self.points > 0 {
            line.push_str(&format!(" (+{}pts)", self.points));
        }
        line
    }
}

/// A rendered export ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

pub struct PlayExporter;

impl PlayExporter {
    pub fn rows<Tz: TimeZone>(plays: &[Play], tz: &Tz) -> Vec<ExportRow>
    where
        Tz::Offset: std::fmt::Display,
    {
        plays.iter().map(|play| ExportRow::from_play(play, tz)).collect()
    }

    /// Bare header line plus one line per row, every row field double-quoted.
    pub fn to_csv(rows: &[ExportRow]) -> Result<String, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        for row in rows {
            writer.serialize(row).map_err(|e| ExportError::Csv(e.to_string()))?;
        }
        let body = writer.into_inner().map_err(|e| ExportError::Csv(e.to_string()))?;
        let body = String::from_utf8(body).map_err(|e| ExportError::Csv(e.to_string()))?;

        let mut content = CSV_HEADERS.join(",");
        if !body.is_empty() {
            content.push('\n');
            content.push_str(body.trim_end_matches('\n'));
        }
        Ok(content)
    }

    pub fn to_text(rows: &[ExportRow]) -> String {
        rows.iter()
            .map(ExportRow::to_text_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the log in `format`, stamping dates in `tz`.
    pub fn render<Tz: TimeZone>(plays: &[Play], format: ExportFormat, tz: &Tz) -> Result<ExportFile, ExportError>
    where
        Tz::Offset: std::fmt::Display,
    {
        if plays.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let rows = Self::rows(plays, tz);
        let content = match format {
            ExportFormat::Csv | ExportFormat::Xlsx => Self::to_csv(&rows)?,
            ExportFormat::Txt => Self::to_text(&rows),
        };
        let today = chrono::Utc::now().with_timezone(tz).date_naive();

        info!("Exported {} plays as {}", rows.len(), format.extension());
        Ok(ExportFile {
            filename: format.filename(today),
            mime_type: format.mime_type(),
            content,
        })
    }

    pub fn render_local(plays: &[Play], format: ExportFormat) -> Result<ExportFile, ExportError> {
        Self::render(plays, format, &Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use scorebook_types::{Player, Side};
    use uuid::Uuid;

    fn play(name: &str, label: &str, side: Side, points: u32) -> Play {
        let player = Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            side,
            order: 0,
            jersey: None,
        };
        Play::new(&player, label, points, Utc.with_ymd_and_hms(2024, 3, 9, 19, 5, 7).unwrap())
    }

    #[test]
    fn test_row_formatting() {
        let row = ExportRow::from_play(&play("Stephen Curry", "3PT Made", Side::Home, 3), &Utc);
        assert_eq!(row.date, "03/09/2024");
        assert_eq!(row.time, "19:05:07");
        assert_eq!(row.team, "Home");
        assert_eq!(row.points, 3);
    }

    #[test]
    fn test_csv_quotes_every_field() {
        let plays = vec![
            play("LeBron James", "D Rebound", Side::Away, 0),
            play("Stephen \"Steph\" Curry", "3PT Made", Side::Home, 3),
        ];
        let csv = PlayExporter::to_csv(&PlayExporter::rows(&plays, &Utc)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(!csv.ends_with('\n'));

        assert_eq!(lines[0], "Date,Time,Player,Action,Team,Points");
        assert_eq!(lines[1], "\"03/09/2024\",\"19:05:07\",\"LeBron James\",\"D Rebound\",\"Away\",\"0\"");
        assert_eq!(
            lines[2],
            "\"03/09/2024\",\"19:05:07\",\"Stephen \"\"Steph\"\" Curry\",\"3PT Made\",\"Home\",\"3\""
        );
    }

    #[test]
    fn test_csv_keeps_commas_inside_fields() {
        let plays = vec![play("Jackson, Jr.", "Foul", Side::Away, 0)];
        let csv = PlayExporter::to_csv(&PlayExporter::rows(&plays, &Utc)).unwrap();

        assert_eq!(
            csv,
            "Date,Time,Player,Action,Team,Points\n\
             \"03/09/2024\",\"19:05:07\",\"Jackson, Jr.\",\"Foul\",\"Away\",\"0\""
        );
        assert_eq!(PlayExporter::to_csv(&[]).unwrap(), "Date,Time,Player,Action,Team,Points");
    }

    #[test]
    fn test_text_omits_zero_points() {
        let plays = vec![
            play("Stephen Curry", "3PT Made", Side::Home, 3),
            play("LeBron James", "Steal", Side::Away, 0),
        ];
        let text = PlayExporter::to_text(&PlayExporter::rows(&plays, &Utc));

        assert_eq!(
            text,
            "03/09/2024 19:05:07 - Stephen Curry (Home): 3PT Made (+3pts)\n\
             03/09/2024 19:05:07 - LeBron James (Away): Steal"
        );
    }

    #[test]
    fn test_render_formats() {
        let plays = vec![play("Stephen Curry", "FT Made", Side::Home, 1)];

        let csv = PlayExporter::render(&plays, ExportFormat::Csv, &Utc).unwrap();
        let xlsx = PlayExporter::render(&plays, ExportFormat::Xlsx, &Utc).unwrap();
        let txt = PlayExporter::render(&plays, ExportFormat::Txt, &Utc).unwrap();

        assert_eq!(csv.content, xlsx.content);
        assert!(csv.filename.starts_with("playbyplay_"));
        assert!(csv.filename.ends_with(".csv"));
        assert!(xlsx.filename.ends_with(".xlsx"));
        assert_eq!(txt.mime_type, "text/plain");
        assert!(txt.content.ends_with("(+1pts)"));
    }

    #[test]
    fn test_render_empty_log() {
        let result = PlayExporter::render(&[], ExportFormat::Csv, &Utc);
        assert_eq!(result, Err(ExportError::NothingToExport));
        assert_eq!(ExportError::NothingToExport.to_string(), "No plays to export");
    }

    #[test]
    fn test_format_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(ExportFormat::Txt.filename(date), "playbyplay_2024-03-09.txt");
        assert_eq!(ExportFormat::parse("XLSX"), Some(ExportFormat::Xlsx));
        assert_eq!(ExportFormat::parse("pdf"), None);
    }
}
