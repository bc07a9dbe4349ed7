mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod store;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cmd::ticket::{self, CriarArgs, ListarArgs, ResolverArgs, ResponderArgs, VerArgs};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::json_file::JsonFileStore;
use crate::services::BlobStore;
use crate::store::TicketStore;

#[derive(Parser)]
#[command(name = "chamado", author, version, about = "Rastreador local de chamados de suporte")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Abrir um novo chamado.
    Criar(CriarArgs),
    /// Listar os chamados.
    Listar(ListarArgs),
    /// Mostrar um chamado e suas respostas.
    Ver(VerArgs),
    /// Registrar uma resposta do suporte em um chamado.
    Responder(ResponderArgs),
    /// Marcar um chamado como resolvido e arquivá-lo no histórico.
    Resolver(ResolverArgs),
    /// Mostrar o histórico de chamados resolvidos.
    Logs,
    /// Acompanhar a lista de chamados, atualizando a cada 5 segundos.
    Acompanhar(ListarArgs),
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let data_dir = config::data_directory()?;
    let blobs: Arc<dyn BlobStore> = Arc::new(JsonFileStore::new(data_dir));
    let tickets = Arc::new(TicketStore::new(blobs));
    let ctx = AppContext::new(tickets);

    match cli.command {
        Commands::Criar(args) => ticket::criar(&ctx, args),
        Commands::Listar(args) => ticket::listar(&ctx, args),
        Commands::Ver(args) => ticket::ver(&ctx, args),
        Commands::Responder(args) => ticket::responder(&ctx, args),
        Commands::Resolver(args) => ticket::resolver(&ctx, args),
        Commands::Logs => ticket::logs(&ctx),
        Commands::Acompanhar(args) => ticket::acompanhar(&ctx, args),
    }
}
