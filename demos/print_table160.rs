use std::io::{BufWriter, Write};

use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use grib1_ectable::ecmwf_table_160;

/// ECMWFローカル・パラメーター表160を出力する。
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("lookup").args(["code", "mnemonic"])))]
struct Args {
    /// 指定したパラメーター番号のエントリーのみ出力
    #[arg(long, allow_negative_numbers = true)]
    code: Option<i32>,

    /// 指定した略称のエントリーのみ出力
    #[arg(long)]
    mnemonic: Option<String>,

    /// CSV形式で出力
    #[arg(long, conflicts_with = "lookup")]
    csv: bool,

    /// 割り当てられていないパラメーターも出力
    #[arg(long, conflicts_with = "lookup")]
    all: bool,

    /// エントリーをJSON形式で出力
    #[arg(long, requires = "lookup")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let table = ecmwf_table_160();
    let mut writer = BufWriter::new(std::io::stdout());

    let entry = match (args.code, args.mnemonic.as_deref()) {
        (Some(code), _) => Some((code, table.lookup(code)?)),
        (None, Some(mnemonic)) => {
            let (code, entry) = table.find_by_mnemonic(mnemonic)?;
            Some((code as i32, entry))
        }
        (None, None) => None,
    };

    match entry {
        Some((_, entry)) if args.json => {
            serde_json::to_writer_pretty(&mut writer, entry)?;
            writeln!(writer)?;
        }
        Some((code, entry)) => {
            writeln!(writer, "{code}:{}:{}", entry.mnemonic, entry.description)?;
        }
        None if args.csv => table.write_csv(&mut writer, args.all)?,
        None => table.pretty_print(&mut writer, args.all)?,
    }
    writer.flush()?;

    Ok(())
}
