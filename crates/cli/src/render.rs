use serde::Serialize;

use spanset_engine::{ClassifyReport, CoverageReport};


#[derive(Serialize)]
struct CoverageJson {
    ranges: Vec<String>,
    errors: Vec<String>,
    total: String
}


#[derive(Serialize)]
struct ClassifyJson {
    ranges: Vec<String>,
    errors: Vec<String>,
    values: Vec<VerdictJson>
}


#[derive(Serialize)]
struct VerdictJson {
    value: String,
    contained: bool
}


pub fn print_coverage(report: &CoverageReport, json: bool) -> anyhow::Result<()> {
    if json {
        let out = CoverageJson {
            ranges: report.spans.iter().map(|s| s.to_string()).collect(),
            errors: report.errors.iter().map(|e| e.to_string()).collect(),
            total: report.total.to_string()
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(())
    }

    for err in report.errors.iter() {
        println!("error: {}", err);
    }
    for span in report.spans.iter() {
        println!("{}", span);
    }
    if report.is_empty() {
        println!("no usable ranges in input");
    } else {
        println!("total coverage: {}", report.total);
    }
    Ok(())
}


pub fn print_classify(report: &ClassifyReport, json: bool) -> anyhow::Result<()> {
    if json {
        let out = ClassifyJson {
            ranges: report.spans.iter().map(|s| s.to_string()).collect(),
            errors: report.errors.iter().map(|e| e.to_string()).collect(),
            values: report.classifications.iter()
                .map(|c| VerdictJson {
                    value: c.value.to_string(),
                    contained: c.contained
                })
                .collect()
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(())
    }

    for err in report.errors.iter() {
        println!("error: {}", err);
    }
    for c in report.classifications.iter() {
        println!("{}: {}", c.value, if c.contained { "inside" } else { "outside" });
    }
    Ok(())
}
