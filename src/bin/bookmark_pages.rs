//! Command-line front end: converts one bookmark export and writes the
//! result beside it.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use bookmark_pages::{convert_bytes, files, Error, Options, OutputFormat};

#[derive(Parser)]
#[command(name = "bookmark-pages")]
#[command(version, about = "Convert a browser bookmark export into Markdown or HTML pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    bookmark-pages bookmarks.html                  Write bookmarks.md
    bookmark-pages -f page bookmarks.html          Write bookmarks_top.html
    bookmark-pages -f navigator bookmarks.html     Write bookmarks_tree.html
    bookmark-pages                                 Prompt for the input path")]
struct Cli {
    /// Bookmark export (.html); prompted for when omitted
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Output file (default: beside the input, with a format suffix)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Extra root-container folder titles to skip (repeatable)
    #[arg(long = "root-label", value_name = "TITLE")]
    root_labels: Vec<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("转换完成！输出文件已保存到：{}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{e:?}");
            eprintln!("转换过程中发生错误：{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<PathBuf, Error> {
    let input = match &cli.input {
        Some(path) => files::clean_input_path(path),
        None => prompt_for_path()?,
    };

    let bytes = files::read_input(&input)?;

    let mut options = Options::default();
    options.root_labels.extend(cli.root_labels.iter().cloned());

    let rendered = convert_bytes(&bytes, cli.format, &options)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| files::output_path(&input, cli.format));
    fs::write(&output, rendered)?;
    info!("wrote {} ({})", output.display(), cli.format);

    Ok(output)
}

fn prompt_for_path() -> Result<PathBuf, Error> {
    print!("请输入书签HTML文件的完整路径：");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(files::clean_input_path(&line))
}
