/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Command-line front end: build a graph from text, optionally auto-connect
//! similar labels, and write the JSON export.

use std::path::PathBuf;
use std::process::ExitCode;

use bpaf::Bpaf;
use graphqueen::config::EditorConfig;
use graphqueen::persistence;
use graphqueen::GraphEditor;
use log::error;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
/// Build a node graph from text and connect similar labels
struct CliArgs {
    /// Graph export to start from
    #[bpaf(long, argument("PATH"))]
    input: Option<PathBuf>,

    /// Text file; every non-blank line becomes a node
    #[bpaf(long, argument("PATH"))]
    text: Option<PathBuf>,

    /// Add a single node with this label (repeatable)
    #[bpaf(long("node"), argument("LABEL"), many)]
    nodes: Vec<String>,

    /// Connect nodes with similar labels
    #[bpaf(long, switch)]
    auto_connect: bool,

    /// Similarity threshold in [0, 1] (default from editor.toml)
    #[bpaf(long, argument("T"))]
    threshold: Option<f64>,

    /// Where to write the export; stdout when omitted
    #[bpaf(long, argument("PATH"))]
    output: Option<PathBuf>,
}

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = GraphEditor::new(EditorConfig::load());

    if let Some(path) = &args.input {
        editor.import(persistence::read_export(path)?);
    }
    if let Some(path) = &args.text {
        let text = std::fs::read_to_string(path)?;
        editor.add_nodes_from_text(&text);
    }
    for label in &args.nodes {
        editor.add_node(label);
    }

    if args.auto_connect {
        let threshold = args
            .threshold
            .unwrap_or(editor.config.similarity_threshold);
        let summary = editor.auto_connect(threshold)?;
        eprintln!(
            "Auto-connect added {} edges ({} pairs compared)",
            summary.edges_added, summary.pairs_evaluated
        );
    }

    let export = editor.export();
    match &args.output {
        Some(path) => persistence::write_export(path, &export)?,
        None => println!("{}", persistence::to_json(&export)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli_args().run();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}
