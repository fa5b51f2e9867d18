use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::content;
use crate::sample::Reading;
use crate::stats::SummaryStatistics;

pub fn write_samples<W: Write>(out: &mut W, readings: &[Reading]) -> Result<()> {
    writeln!(
        out,
        "{:<8} {:>18} {:>18}",
        "Hora",
        content::TEMPERATURE_LABEL,
        content::HUMIDITY_LABEL
    )?;
    writeln!(out, "{}", "-".repeat(46))?;
    for reading in readings {
        writeln!(
            out,
            "{:<8} {:>18.2} {:>18.2}",
            reading.hour_label, reading.temperature, reading.humidity
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, name: &str, stats: &SummaryStatistics) -> Result<()> {
    writeln!(out, "{}", name)?;
    writeln!(out, "{}", "-".repeat(24))?;
    write!(out, "{}", stats)?;
    Ok(())
}

/// Side-by-side comparison of the temperature and humidity summaries.
pub fn write_statistics<W: Write>(
    out: &mut W,
    temperature: &SummaryStatistics,
    humidity: &SummaryStatistics,
) -> Result<()> {
    writeln!(
        out,
        "{:<8} {:>18} {:>18}",
        "",
        content::TEMPERATURE_LABEL,
        content::HUMIDITY_LABEL
    )?;
    for ((label, temperature), (_, humidity)) in
        temperature.rows().iter().zip(humidity.rows().iter())
    {
        writeln!(out, "{:<8} {:>18} {:>18}", label, temperature, humidity)?;
    }
    Ok(())
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("unable to serialize output")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_statistics_json<W: Write>(
    out: &mut W,
    temperature: &SummaryStatistics,
    humidity: &SummaryStatistics,
) -> Result<()> {
    write_json(
        out,
        &json!({ "temperature": temperature, "humidity": humidity }),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stats::compute_statistics;

    fn readings() -> Vec<Reading> {
        vec![
            Reading {
                hour_label: "0:00".to_string(),
                temperature: 25.5,
                humidity: 71.234,
            },
            Reading {
                hour_label: "1:00".to_string(),
                temperature: 26.1,
                humidity: 69.0,
            },
        ]
    }

    #[test]
    fn test_write_samples() -> Result<()> {
        let mut out = Vec::new();
        write_samples(&mut out, &readings())?;
        let text = String::from_utf8(out)?;
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Hora"));
        assert!(lines[2].starts_with("0:00"));
        assert!(lines[2].ends_with("71.23"));
        assert!(lines[3].contains("26.10"));
        Ok(())
    }

    #[test]
    fn test_write_statistics() -> Result<()> {
        let temperature = compute_statistics(&[1.0, 2.0, 3.0, 4.0])?;
        let humidity = compute_statistics(&[5.0])?;
        let mut out = Vec::new();
        write_statistics(&mut out, &temperature, &humidity)?;
        let text = String::from_utf8(out)?;
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert!(lines[1].starts_with("Count"));
        assert!(lines[1].ends_with("1"));
        assert!(lines[3].starts_with("Std"));
        assert!(lines[3].contains("1.12"));
        assert!(lines[3].ends_with("0.00"));
        Ok(())
    }

    #[test]
    fn test_write_summary() -> Result<()> {
        let stats = compute_statistics(&[2.0, 4.0])?;
        let mut out = Vec::new();
        write_summary(&mut out, "values", &stats)?;
        let text = String::from_utf8(out)?;
        assert!(text.starts_with("values\n"));
        assert!(text.contains("Mean    :     3.00"));
        Ok(())
    }

    #[test]
    fn test_write_json() -> Result<()> {
        let temperature = compute_statistics(&[1.0, 2.0, 3.0, 4.0])?;
        let humidity = compute_statistics(&[5.0])?;
        let mut out = Vec::new();
        write_statistics_json(&mut out, &temperature, &humidity)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["temperature"]["count"], 4);
        assert_eq!(value["temperature"]["std"], 1.12);
        assert_eq!(value["humidity"]["q75"], 5.0);

        let mut out = Vec::new();
        write_json(&mut out, &readings())?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value[1]["hour_label"], "1:00");
        Ok(())
    }
}
