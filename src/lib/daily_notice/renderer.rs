use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use askama::Template;
use chrono::NaiveDate;
use log::info;
use regex::Regex;

use super::error::NoticeResult;
use super::models::notice_model::{DutyEntry, Notice};

static TITLE_QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"《.*?》").expect("title quote pattern is valid"));

/// Piece of a special note; quoted titles (`《...》`) are highlighted on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSegment {
    pub text: String,
    pub highlight: bool,
}

/// The mobile page. Cards without content (no courses, no special notes) are left out.
#[derive(Template)]
#[template(path = "mobile_notice.html")]
pub struct MobileNoticePage<'a> {
    pub notice: &'a Notice,
    pub duty: Vec<DutyEntry>,
    pub notes: Vec<Vec<NoteSegment>>,
}

impl<'a> MobileNoticePage<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self {
            notice,
            duty: notice.duty_entries(),
            notes: notice
                .special_notes
                .iter()
                .map(|note| split_highlights(note))
                .collect(),
        }
    }
}

pub fn split_highlights(note: &str) -> Vec<NoteSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for quote in TITLE_QUOTE_RE.find_iter(note) {
        if quote.start() > last {
            segments.push(NoteSegment {
                text: note[last..quote.start()].to_owned(),
                highlight: false,
            });
        }
        segments.push(NoteSegment {
            text: quote.as_str().to_owned(),
            highlight: true,
        });
        last = quote.end();
    }
    if last < note.len() {
        segments.push(NoteSegment {
            text: note[last..].to_owned(),
            highlight: false,
        });
    }
    segments
}

pub fn render(notice: &Notice) -> NoticeResult<String> {
    Ok(MobileNoticePage::new(notice).render()?)
}

pub fn page_file_name(target: NaiveDate) -> String {
    format!("lezhiban_reminder_{}.html", target.format("%Y%m%d"))
}

/// Renders the page and writes it into `output_dir`, named after `target`.
pub fn write_page(
    notice: &Notice,
    target: NaiveDate,
    output_dir: &Path,
) -> NoticeResult<(String, PathBuf)> {
    let html = render(notice)?;
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(page_file_name(target));
    fs::write(&path, &html)?;
    info!("Wrote mobile page to {}", path.display());
    Ok((html, path))
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
