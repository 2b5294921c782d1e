//! ldprism CLI: project resources of a repository fixture into RDF
//!
//! Loads a YAML fixture into the in-memory store and prints the description
//! of one resource.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use ldprism::{
    check_fixity, validate, ExpectedFixity, IdentifierTranslator, InMemoryStore, ProjectionConfig,
    ProjectionEngine, RepositoryFixture, RepositoryStore, ResourceClass, ResourceId, Triple, TripleStream,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ldprism", version, about = "Project repository resources into RDF")]
struct Cli {
    /// Repository fixture (YAML)
    #[arg(long, global = true, env = "LDPRISM_FIXTURE")]
    fixture: Option<PathBuf>,

    /// Projection config (YAML); defaults apply when omitted
    #[arg(long, global = true, env = "LDPRISM_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "ntriples", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Ntriples,
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe one resource
    Project {
        /// Repository path, e.g. /books/b1
        path: String,

        /// Stop after this many triples
        #[arg(long)]
        limit: Option<usize>,

        /// Include triples from resources pointing here
        #[arg(long)]
        references: bool,

        /// Include version history
        #[arg(long)]
        versions: bool,

        /// Include the namespace catalog
        #[arg(long)]
        namespaces: bool,

        /// Inline the types and properties of each child
        #[arg(long)]
        embed: bool,
    },
    /// Check and describe the fixity of a binary's stored copies
    Fixity {
        path: String,

        /// Expected checksum URI, e.g. urn:sha-256:...
        #[arg(long)]
        checksum: String,

        /// Expected size in bytes
        #[arg(long)]
        size: u64,
    },
    /// Check that a resource's description carries the server-managed triples
    Validate { path: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ProjectionConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ProjectionConfig::default(),
    };

    let fixture_path = match &cli.fixture {
        Some(path) => path,
        None => bail!("no repository fixture given (use --fixture or LDPRISM_FIXTURE)"),
    };
    let fixture = RepositoryFixture::from_file(fixture_path)
        .with_context(|| format!("loading fixture {}", fixture_path.display()))?;
    let environment = fixture.environment.clone();
    let store = fixture.into_store()?;

    if let Commands::Project {
        references,
        versions,
        namespaces,
        embed,
        ..
    } = &cli.command
    {
        let options = &mut config.options;
        options.include_inbound_references |= *references;
        options.include_versions |= *versions;
        options.include_namespaces |= *namespaces;
        options.embed_children |= *embed;
    }

    let translator = config.translator()?;
    let engine = ProjectionEngine::new(config).with_environment(environment);

    match &cli.command {
        Commands::Project { path, limit, .. } => {
            let stream = engine.project(&store, &translator, &ResourceId::new(path.as_str()))?;
            print_stream(stream, *limit, &cli.format)
        }
        Commands::Fixity { path, checksum, size } => {
            let id = ResourceId::new(path.as_str());
            let expected = ExpectedFixity::new(checksum.as_str(), *size);
            let results = check_fixity(&store, &id, &expected)?;
            let failed = results.iter().filter(|r| !r.is_success()).count();
            info!("{} of {} stored copies failed fixity", failed, results.len());
            let stream = engine.project_fixity(&store, &translator, &id, results)?;
            print_stream(stream, None, &cli.format)
        }
        Commands::Validate { path } => run_validate(&engine, &store, &translator, path),
    }
}

fn run_validate(
    engine: &ProjectionEngine,
    store: &InMemoryStore,
    translator: &IdentifierTranslator,
    path: &str,
) -> Result<()> {
    let resource = store.require(&ResourceId::new(path))?;
    let class = if resource.is_description() {
        ResourceClass::BinaryDescription
    } else if resource.is_container() {
        ResourceClass::Container
    } else {
        bail!("{} is neither a container nor a binary description", resource.id);
    };

    let subject = translator.forward(&resource.id)?;
    let triples = engine.project(store, translator, &resource.id)?.into_vec()?;
    validate(&triples, &subject, class)?;
    println!("{} is a valid {}", subject, class);
    Ok(())
}

fn print_stream(stream: TripleStream<'_>, limit: Option<usize>, format: &OutputFormat) -> Result<()> {
    let namespaces = stream.namespaces().clone();
    let triples = stream
        .take(limit.unwrap_or(usize::MAX))
        .collect::<Result<Vec<Triple>, _>>()?;

    match format {
        OutputFormat::Ntriples => {
            for triple in &triples {
                println!("{}", triple);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = triples
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "subject": t.subject.as_str(),
                        "predicate": t.predicate.as_str(),
                        "object": t.object.to_string(),
                    })
                })
                .collect();
            let document = serde_json::json!({ "namespaces": namespaces, "triples": rows });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        OutputFormat::Table => {
            if triples.is_empty() {
                println!("(no triples)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["subject", "predicate", "object"]);
            for t in &triples {
                table.add_row(vec![t.subject.to_string(), t.predicate.to_string(), t.object.to_string()]);
            }

            println!("{}", table);
            println!("{} triple(s)", triples.len());
        }
    }

    Ok(())
}
