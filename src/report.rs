use crate::types::IconCatalog;

/// How a source's summary is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// One count line and one sample line per category
    PerCategory,
    /// A single total line for the whole catalog, labelled with the source's display name
    Total(&'static str),
}

/// Human-readable count/sample summary, one block per category or one in total.
/// Every block ends with a blank line.
pub fn render_report(catalog: &IconCatalog, style: ReportStyle, sample_size: usize) -> String {
    let mut out = String::new();
    match style {
        ReportStyle::PerCategory => {
            for entry in catalog.categories() {
                out.push_str(&format!("{}: {} icons\n", entry.category, entry.names.len()));
                out.push_str(&sample_line(&entry.names, sample_size));
            }
        }
        ReportStyle::Total(label) => {
            let names: Vec<String> = catalog
                .categories()
                .flat_map(|entry| entry.names.iter().cloned())
                .collect();
            out.push_str(&format!("Total {} icons: {}\n", label, names.len()));
            out.push_str(&sample_line(&names, sample_size));
        }
    }
    out
}

fn sample_line(names: &[String], sample_size: usize) -> String {
    let end = names.len().min(sample_size);
    format!("Example icons: {}\n\n", names[..end].join(", "))
}
