use clap::Parser;


#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CLI {
    /// Input file with range text; reads stdin when absent
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Segment delimiter
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Treat input as two blank-line separated blocks:
    /// newline-delimited ranges, then values to classify
    #[arg(long)]
    pub classify: bool,

    /// Print the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool
}
