//! Entry point: load the resume, build or load the index, run the console.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use assistant_cli::{run_console, ResumeAssistant};
use assistant_model::{GenerationConfig, OpenAiCompatClient};
use assistant_rag::{
    load_document, Chunker, OllamaEmbeddingProvider, RagConfig, RecursiveChunker, ResumeIndex,
    Retriever,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resume-assistant", version, about = "Answer questions about a resume, grounded in its text")]
struct Cli {
    /// Path to the resume (PDF or plain text).
    #[arg(default_value = "./sources/resume.pdf")]
    resume: PathBuf,

    /// Directory holding the persisted embedding index.
    #[arg(long, default_value = "./.resume_index")]
    persist_dir: PathBuf,

    /// Embedding model served by Ollama.
    #[arg(long, default_value = "mxbai-embed-large:latest")]
    embedding_model: String,

    /// Base URL of the Ollama server.
    #[arg(long, default_value = "http://localhost:11434")]
    embedding_url: String,

    /// Chat model name.
    #[arg(long, default_value = "llama3.2")]
    chat_model: String,

    /// Base URL of the OpenAI-compatible chat endpoint.
    #[arg(long, default_value = "http://localhost:1234/v1")]
    chat_url: String,

    /// API key for the chat endpoint (local servers accept any value).
    #[arg(long, default_value = "ollama")]
    api_key: String,

    /// Sampling temperature for generation.
    #[arg(long, default_value_t = 0.2)]
    temperature: f32,

    /// Number of chunks retrieved per question.
    #[arg(long, default_value_t = 4)]
    top_k: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {e:#}");
        eprintln!(
            "\nTroubleshooting tips:\n\
             - Ensure `ollama` is installed and running: `ollama serve`\n\
             - Pull the required models, e.g.: `ollama pull mxbai-embed-large` and `ollama pull llama3.2`\n\
             - Ensure the chat endpoint (default http://localhost:1234/v1) is reachable\n\
             - Verify the resume path is correct"
        );
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = RagConfig::builder().top_k(cli.top_k).build()?;

    println!("Loading resume from: {}", cli.resume.display());
    let document = load_document(&cli.resume)?;

    let chunker = RecursiveChunker::new(config.chunk_size, config.chunk_overlap);
    let chunks = chunker.chunk(&document);
    println!("Parsed {} chunks.", chunks.len());

    let embedder = Arc::new(
        OllamaEmbeddingProvider::new()
            .with_model(&cli.embedding_model)
            .with_base_url(&cli.embedding_url),
    );
    let index = ResumeIndex::build_or_load(chunks, &cli.persist_dir, embedder).await?;
    let retriever = Retriever::new(Arc::new(index), config.top_k);

    let model = Arc::new(OpenAiCompatClient::new(GenerationConfig {
        base_url: cli.chat_url,
        api_key: cli.api_key,
        model: cli.chat_model,
        temperature: cli.temperature,
    }));

    let assistant = ResumeAssistant::new(retriever, model);

    println!("\nResume assistant ready. Ask away!");
    println!("Type 'exit' or 'quit' to end.\n");

    run_console(&assistant).await
}
