//! Writes a small set of demo inputs into `sample_data/` so the app can be
//! exercised by hand: three contact lists sharing phone numbers under
//! inconsistent formatting.  Run with `cargo run --bin generate_sample`.

use std::path::Path;

fn write_csv(path: &Path, header: &[&str], rows: &[&[&str]]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(*row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let dir = Path::new("sample_data");
    std::fs::create_dir_all(dir)?;

    // Rank 1: the authoritative list.  Dashed phone numbers.
    write_csv(
        &dir.join("crm_master.csv"),
        &["phone", "name", "source"],
        &[
            &["555-0101", "Ada Lovelace", "crm"],
            &["555-0102", "Grace Hopper", "crm"],
            &["555-0103", "Edsger Dijkstra", "crm"],
        ],
    )?;

    // Rank 2: overlaps with rank 1 under different formatting, plus a row
    // with no phone number at all.
    write_csv(
        &dir.join("webform_leads.csv"),
        &["phone", "name", "campaign"],
        &[
            &["(555) 0101", "Ada L.", "spring"],
            &["555 0104", "Alan Turing", "spring"],
            &["", "Anonymous", "spring"],
        ],
    )?;

    // Rank 3: one value from each earlier file, one new.
    write_csv(
        &dir.join("event_signups.csv"),
        &["phone", "name"],
        &[
            &["5550102", "G. Hopper"],
            &["5550104", "A. Turing"],
            &["555-0105", "Barbara Liskov"],
        ],
    )?;

    println!("Wrote 3 sample files to {}", dir.display());
    Ok(())
}
