use prof_query::Page;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{notice, output};

/// Machine-readable page for json/raw output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageEnvelope<'a, T: Serialize> {
    page: usize,
    total_pages: usize,
    total_items: usize,
    items: &'a [T],
}

/// Move to the `--page` requested, if any. Out-of-range pages keep page 1.
pub fn apply_page_flag(goto: impl FnOnce(usize) -> bool, flags: &GlobalFlags) {
    if let Some(page) = flags.page {
        if !goto(page) {
            tracing::warn!(page, "page out of range; showing page 1");
        }
    }
}

/// Table: the rows plus a footer line. json/raw: full records with page data.
pub fn print_page<T, R>(
    page: &Page<T>,
    to_row: impl Fn(&T) -> R,
    label: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize,
{
    if flags.format == OutputFormat::Table {
        let rows: Vec<R> = page.items.iter().map(to_row).collect();
        output(&rows, flags.format)?;
        notice(
            &format!(
                "page {}/{} ({} {label})",
                page.number,
                page.total_pages.max(1),
                page.total_items
            ),
            flags,
        );
        return Ok(());
    }

    output(
        &PageEnvelope {
            page: page.number,
            total_pages: page.total_pages,
            total_items: page.total_items,
            items: &page.items,
        },
        flags.format,
    )
}
