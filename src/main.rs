//! 命令行查看器：`nn-lens`
//!
//! Usage:
//!   nn-lens model.json
//!   nn-lens model.json --image cat.png --layer 1 --dot model.dot

use nn_lens::config::ViewerConfig;
use nn_lens::graph::{GraphModel, NetworkSummary, NodeId, NodeVariant};
use nn_lens::import::spawn_import;
use nn_lens::preview::{FilterGallery, FilterPreviewEngine};
use nn_lens::vision::{load_image, save_image};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

const USAGE: &str =
    "Usage: nn-lens <model.json> [--image <img>] [--layer <n>] [--config <cfg.json>] [--dot <out.dot>]";

#[derive(Debug, Default)]
struct Options {
    model: PathBuf,
    image: Option<PathBuf>,
    layer: Option<u64>,
    config: Option<PathBuf>,
    dot: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args);

    if let Err(err) = run(&options) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("nn-lens: 神经网络结构与滤波器查看器");
    eprintln!();
    eprintln!("{USAGE}");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --image <IMG>     拖入卷积层预览的图像");
    eprintln!("  --layer <N>       预览所用的节点编号（缺省为第一个卷积层）");
    eprintln!("  --config <FILE>   查看器配置（JSON）");
    eprintln!("  --dot <FILE>      导出 Graphviz DOT 文件");
}

fn parse_args(args: &[String]) -> Options {
    let mut model: Option<PathBuf> = None;
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--image" => options.image = Some(PathBuf::from(flag_value(args, &mut i))),
            "--config" => options.config = Some(PathBuf::from(flag_value(args, &mut i))),
            "--dot" => options.dot = Some(PathBuf::from(flag_value(args, &mut i))),
            "--layer" => {
                let value = flag_value(args, &mut i);
                options.layer = Some(value.parse().unwrap_or_else(|_| {
                    eprintln!("error: invalid layer id '{value}'");
                    process::exit(1);
                }));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other if model.is_none() => model = Some(PathBuf::from(other)),
            other => {
                eprintln!("error: unexpected argument '{other}'");
                eprintln!("{USAGE}");
                process::exit(1);
            }
        }
        i += 1;
    }

    options.model = model.unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    options
}

fn flag_value<'a>(args: &'a [String], i: &mut usize) -> &'a str {
    *i += 1;
    args.get(*i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        process::exit(1);
    })
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let config = match &options.config {
        Some(path) => ViewerConfig::load(path).unwrap_or_else(|err| {
            log::warn!("无法读取配置 {}，使用默认配置: {err}", path.display());
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    };

    let bytes = std::fs::read(&options.model)?;
    let graph = spawn_import(bytes)?.wait()?;

    println!("{}", NetworkSummary::from_graph(&graph)?);
    println!();
    for (index, row) in graph.assign_node_rows()?.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|node| format!("{} {}", node.id(), node.record().kind))
            .collect();
        println!("{index:>3}: {}", cells.join("  "));
    }

    if let Some(path) = &options.dot {
        std::fs::write(path, graph.to_dot()?)?;
        log::info!("DOT 已写入 {}", path.display());
    }

    if let Some(path) = &options.image {
        preview_layer(&graph, options.layer, path, &config)?;
    }
    Ok(())
}

/// 用指定（或第一个）卷积层的滤波器预览图像，并把归一化后的结果逐张写入输出目录
fn preview_layer(
    graph: &GraphModel,
    layer: Option<u64>,
    image_path: &Path,
    config: &ViewerConfig,
) -> Result<(), Box<dyn Error>> {
    let node = match layer {
        Some(id) => graph.node(NodeId(id))?,
        None => graph
            .nodes()
            .find(|node| matches!(node.variant(), NodeVariant::Convolution { .. }))
            .ok_or("模型中没有卷积层")?,
    };
    if !matches!(node.variant(), NodeVariant::Convolution { .. }) {
        return Err(format!("节点{}（{}）不是卷积层", node.id(), node.record().kind).into());
    }

    let image = load_image(image_path)?;
    let mut gallery = FilterGallery::new(node.record());
    gallery.preview(&FilterPreviewEngine::from_config(config), &image)?;

    std::fs::create_dir_all(&config.output_dir)?;
    let frames = gallery.display_frames(config.neutral_value);
    for (index, frame) in frames.iter().enumerate() {
        save_image(frame, config.output_dir.join(format!("filter_{index}.png")))?;
    }
    log::info!(
        "节点{}的{}张预览图（{}行）已写入 {}",
        node.id(),
        frames.len(),
        gallery.rows(config.gallery_columns).len(),
        config.output_dir.display()
    );
    Ok(())
}
