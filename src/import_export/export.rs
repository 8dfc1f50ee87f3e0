//! Export blob composition
//!
//! Builds a downloadable artifact (content, filename, MIME type) for a
//! link set in a requested exchange format. Links are grouped by
//! category before encoding so both formats present categories in
//! first-seen order.

use chrono::{DateTime, Local};

use crate::config::AppConfig;
use crate::error::Result;
use crate::import_export::{csv, html, ExchangeFormat};
use crate::models::Link;
use crate::utils;

/// A fully-composed export artifact
///
/// The filename carries a timestamp to the second; two exports within
/// the same second produce the same name, which is tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub content: String,
    pub filename: String,
    pub mime_type: String,
}

/// Export links in the format named by `format_token`, stamped now
pub fn export(links: &[Link], format_token: &str, config: &AppConfig) -> Result<ExportBlob> {
    export_at(links, format_token, config, Local::now())
}

/// Export links with an explicit timestamp for the filename and, for
/// bookmarks output, the anchors' `ADD_DATE`
pub fn export_at(
    links: &[Link],
    format_token: &str,
    config: &AppConfig,
    at: DateTime<Local>,
) -> Result<ExportBlob> {
    let format = ExchangeFormat::from_token(format_token)?;

    let content = match format {
        ExchangeFormat::Csv => {
            let ordered: Vec<Link> = html::group_by_category(links, &config.default_category)
                .into_iter()
                .flat_map(|(_, members)| members.into_iter().cloned())
                .collect();
            csv::encode(&ordered)
        }
        ExchangeFormat::BookmarksHtml => {
            html::encode_at(links, &config.default_category, at.timestamp())
        }
    };

    log::debug!(
        "composed {} export of {} link(s)",
        format.extension(),
        links.len()
    );

    Ok(ExportBlob {
        content,
        filename: filename(&config.app_name, "links", format.extension(), &at),
        mime_type: format.mime_type().to_string(),
    })
}

/// Build the fill-in-the-blanks CSV template blob, stamped now
pub fn export_template(config: &AppConfig) -> ExportBlob {
    export_template_at(config, Local::now())
}

/// Template blob with an explicit timestamp for the filename
pub fn export_template_at(config: &AppConfig, at: DateTime<Local>) -> ExportBlob {
    ExportBlob {
        content: csv::encode_template(),
        filename: filename(&config.app_name, "links_template", "csv", &at),
        mime_type: "text/csv".to_string(),
    }
}

fn filename(app_name: &str, artifact: &str, extension: &str, at: &DateTime<Local>) -> String {
    format!(
        "{}_{}_{}.{}",
        utils::slugify(app_name),
        artifact,
        at.format("%Y-%m-%d_%H-%M-%S"),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkdeckError;
    use crate::models::Environments;
    use chrono::TimeZone;
    use regex::Regex;

    fn sample_link(name: &str, category: &str) -> Link {
        Link {
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            color: "#6366f1".to_string(),
            tags: Vec::new(),
            environments: Environments::production_only(format!(
                "https://{}.example.com",
                name.to_lowercase()
            )),
        }
    }

    fn fixed_instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 14, 30, 5).unwrap()
    }

    #[test]
    fn test_export_filename_exact() {
        let blob = export_at(&[], "csv", &AppConfig::default(), fixed_instant()).unwrap();
        assert_eq!(blob.filename, "linkdeck_links_2024-03-01_14-30-05.csv");
    }

    #[test]
    fn test_export_filename_shape() {
        let blob = export(&[], "csv", &AppConfig::default()).unwrap();
        let pattern =
            Regex::new(r"^linkdeck_links_\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}\.csv$").unwrap();
        assert!(
            pattern.is_match(&blob.filename),
            "unexpected filename {}",
            blob.filename
        );
    }

    #[test]
    fn test_export_slugifies_app_name() {
        let config = AppConfig {
            app_name: "My Link Deck".to_string(),
            ..AppConfig::default()
        };

        let blob = export_at(&[], "html", &config, fixed_instant()).unwrap();
        assert!(blob.filename.starts_with("my-link-deck_links_"));
        assert!(blob.filename.ends_with(".html"));
    }

    #[test]
    fn test_export_unsupported_format() {
        let outcome = export(&[], "pdf", &AppConfig::default());
        assert!(matches!(outcome, Err(LinkdeckError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_export_mime_types() {
        let config = AppConfig::default();
        assert_eq!(export(&[], "csv", &config).unwrap().mime_type, "text/csv");
        assert_eq!(export(&[], "html", &config).unwrap().mime_type, "text/html");
        assert_eq!(
            export(&[], "bookmarks", &config).unwrap().mime_type,
            "text/html"
        );
    }

    #[test]
    fn test_export_csv_groups_rows_by_category() {
        let links = vec![
            sample_link("Grafana", "Monitoring"),
            sample_link("GitHub", "Tools"),
            sample_link("Kibana", "Monitoring"),
        ];

        let blob = export_at(&links, "csv", &AppConfig::default(), fixed_instant()).unwrap();
        let names: Vec<&str> = blob
            .content
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap_or(""))
            .collect();

        assert_eq!(names, vec!["Grafana", "Kibana", "GitHub"]);
    }

    #[test]
    fn test_export_html_content() {
        let links = vec![sample_link("GitHub", "Tools")];
        let at = fixed_instant();

        let blob = export_at(&links, "bookmarks", &AppConfig::default(), at).unwrap();

        assert!(blob.content.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
        assert!(blob
            .content
            .contains(&format!("ADD_DATE=\"{}\"", at.timestamp())));
        assert!(blob.filename.ends_with(".html"));
    }

    #[test]
    fn test_export_template_blob() {
        let blob = export_template_at(&AppConfig::default(), fixed_instant());

        assert_eq!(blob.content, csv::encode_template());
        assert_eq!(
            blob.filename,
            "linkdeck_links_template_2024-03-01_14-30-05.csv"
        );
        assert_eq!(blob.mime_type, "text/csv");
    }
}
