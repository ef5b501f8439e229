use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use respimg::core::{print_error_message, RespimgOptions};
use respimg::html::ImageRewriter;
use respimg::srcset::{SourceSet, SourceSetItem, SourceSetTable};

#[derive(Parser)]
#[command(
    name = "respimg",
    version,
    about = "Adds responsive srcset and sizes attributes to images in HTML documents"
)]
struct Cli {
    /// HTML file to process ("-" reads from standard input)
    target: String,

    /// JSON file mapping image paths to their resized renditions
    #[arg(short = 'm', long = "source-map")]
    source_map: Option<String>,

    /// Write the output to file instead of standard output
    #[arg(short, long)]
    output: Option<String>,

    /// Document encoding label (e.g. "utf-8", "iso-8859-1")
    #[arg(short, long)]
    encoding: Option<String>,

    /// Attribute preferred over src when resolving image sources
    #[arg(short = 'a', long = "alternative-src")]
    alternative_src: Option<String>,

    /// Attribute written instead of srcset (e.g. data-srcset)
    #[arg(short = 't', long = "target-attribute")]
    target_attribute: Option<String>,

    /// CSS class appended to every rewritten image
    #[arg(short = 'c', long = "add-class")]
    add_class: Option<String>,

    /// Print the resolved image sources instead of rewriting
    #[arg(short, long)]
    list: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

fn read_target(target: &str) -> io::Result<Vec<u8>> {
    if target == "-" {
        let mut data: Vec<u8> = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        fs::read(target)
    }
}

fn load_source_map(path: &str) -> Result<SourceSetTable, String> {
    let file =
        fs::File::open(path).map_err(|e| format!("Failed to open source map {path}: {e}"))?;
    let entries: HashMap<String, Vec<SourceSetItem>> =
        serde_json::from_reader(file).map_err(|e| format!("Invalid source map {path}: {e}"))?;

    let mut table = SourceSetTable::new();
    for (source_path, items) in entries {
        let mut source_set = SourceSet::new();
        for item in items {
            source_set.push(item.url, item.width);
        }
        table.insert(&source_path, source_set);
    }

    Ok(table)
}

fn write_output(output: Option<&str>, data: &[u8]) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, data),
        None => io::stdout().write_all(data),
    }
}

fn main() {
    let cli = Cli::parse();

    let options = RespimgOptions {
        alternative_src: cli.alternative_src,
        alternative_src_set: cli.target_attribute,
        add_class: cli.add_class,
        encoding: cli.encoding,
        silent: cli.quiet,
    };

    let input_data = match read_target(&cli.target) {
        Ok(data) => data,
        Err(e) => {
            print_error_message(&format!("Failed to read {}: {}", cli.target, e));
            process::exit(1);
        }
    };

    let mut rewriter = ImageRewriter::new(&input_data, options.clone());

    if cli.list {
        for source in rewriter.image_sources() {
            println!("{source}");
        }
        return;
    }

    let source_map_path = match &cli.source_map {
        Some(path) => path,
        None => {
            print_error_message("A source map (-m) is required unless --list is given");
            process::exit(1);
        }
    };

    let source_sets = match load_source_map(source_map_path) {
        Ok(table) => table,
        Err(msg) => {
            print_error_message(&msg);
            process::exit(1);
        }
    };

    let total = rewriter.image_count();
    let (output_data, rewritten) = rewriter.inject_source_sets(&source_sets);

    if let Err(e) = write_output(cli.output.as_deref(), &output_data) {
        print_error_message(&format!("Failed to write output: {e}"));
        process::exit(1);
    }

    if !options.silent {
        eprintln!("Rewrote {rewritten} of {total} images");
    }
}
