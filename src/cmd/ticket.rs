use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Args;
use uuid::Uuid;

use crate::context::AppContext;
use crate::domain::ticket::{Ticket, TicketInput, TicketStatus};
use crate::error::{AppError, AppResult};

// Refresh cadence for the watch view.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Args, Debug, Clone)]
pub struct CriarArgs {
    /// Nome completo do solicitante.
    #[arg(long)]
    pub nome: String,
    /// Setor ou departamento do solicitante.
    #[arg(long)]
    pub setor: String,
    /// Um título breve do problema.
    #[arg(long)]
    pub titulo: String,
    /// Descrição detalhada do problema.
    #[arg(long)]
    pub descricao: String,
}

#[derive(Args, Debug, Clone)]
pub struct ListarArgs {
    /// Filtrar por status: open, pending ou resolved.
    #[arg(short, long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct VerArgs {
    /// Identificador do chamado.
    pub id: Uuid,
}

#[derive(Args, Debug, Clone)]
pub struct ResponderArgs {
    /// Identificador do chamado.
    pub id: Uuid,
    /// Texto da resposta.
    #[arg(short, long)]
    pub mensagem: String,
    /// Autor da resposta (padrão: Support).
    #[arg(short, long)]
    pub autor: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ResolverArgs {
    /// Identificador do chamado.
    pub id: Uuid,
}

pub fn criar(ctx: &AppContext, args: CriarArgs) -> AppResult<()> {
    let input = TicketInput {
        name: args.nome,
        sector: args.setor,
        title: args.titulo,
        description: args.descricao,
    };
    validate_input(&input)?;

    let ticket = ctx.tickets.create_ticket(input)?;
    println!("Chamado criado: {}", ticket.id);
    println!(
        "  {} ({}) - {} - {}",
        ticket.name,
        ticket.sector,
        ticket.title,
        format_date(&ticket.created_at)
    );
    Ok(())
}

pub fn listar(ctx: &AppContext, args: ListarArgs) -> AppResult<()> {
    let filter = parse_status_filter(args.status.as_deref())?;
    let tickets = ctx.tickets.list_tickets()?;
    render_list(&tickets, filter);
    Ok(())
}

pub fn ver(ctx: &AppContext, args: VerArgs) -> AppResult<()> {
    let ticket = ctx.tickets.get_ticket(args.id)?;

    println!("Chamado {}", ticket.id);
    println!("Título: {}", ticket.title);
    println!("Solicitante: {} ({})", ticket.name, ticket.sector);
    println!("Status: {}", ticket.status.label());
    println!("Aberto em: {}", format_date(&ticket.created_at));
    if let Some(resolved_at) = &ticket.resolved_at {
        println!("Resolvido em: {}", format_date(resolved_at));
    }
    println!("Descrição:");
    println!("  {}", ticket.description);

    if ticket.responses.is_empty() {
        println!("Nenhuma resposta ainda.");
    } else {
        println!("Respostas:");
        for response in &ticket.responses {
            println!(
                "  [{}] {}: {}",
                format_date(&response.created_at),
                response.author,
                response.message
            );
        }
    }
    Ok(())
}

pub fn responder(ctx: &AppContext, args: ResponderArgs) -> AppResult<()> {
    if args.mensagem.trim().is_empty() {
        return Err(AppError::Validation(
            "A resposta não pode ser vazia".to_string(),
        ));
    }

    let ticket = ctx
        .tickets
        .respond_to_ticket(args.id, &args.mensagem, args.autor.as_deref())?;
    println!(
        "Resposta registrada. Chamado {} agora está '{}'.",
        ticket.id,
        ticket.status.label()
    );
    Ok(())
}

pub fn resolver(ctx: &AppContext, args: ResolverArgs) -> AppResult<()> {
    let ticket = ctx.tickets.resolve_ticket(args.id)?;
    let resolved_at = ticket
        .resolved_at
        .map(|at| format_date(&at))
        .unwrap_or_else(|| "agora".to_string());
    println!("Chamado {} resolvido em {}.", ticket.id, resolved_at);
    Ok(())
}

pub fn logs(ctx: &AppContext) -> AppResult<()> {
    let logs = ctx.tickets.logs()?;

    println!("Histórico de Chamados Resolvidos");
    if logs.is_empty() {
        println!("Nenhum chamado finalizado até o momento.");
        return Ok(());
    }
    for ticket in &logs {
        let resolved_at = ticket
            .resolved_at
            .map(|at| format_date(&at))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{}  {}  {} ({})  resolvido em {}",
            ticket.id, ticket.title, ticket.name, ticket.sector, resolved_at
        );
    }
    Ok(())
}

pub fn acompanhar(ctx: &AppContext, args: ListarArgs) -> AppResult<()> {
    let filter = parse_status_filter(args.status.as_deref())?;
    loop {
        let tickets = ctx.tickets.list_tickets()?;
        // Clear the terminal before each refresh.
        print!("\x1b[2J\x1b[H");
        println!("Lista de Chamados - {}", format_date(&Utc::now()));
        render_list(&tickets, filter);
        thread::sleep(POLL_INTERVAL);
    }
}

fn render_list(tickets: &[Ticket], filter: Option<TicketStatus>) {
    let filtered: Vec<&Ticket> = tickets
        .iter()
        .filter(|ticket| filter.is_none_or(|status| ticket.status == status))
        .collect();

    if filtered.is_empty() {
        println!("Nenhum chamado encontrado");
        return;
    }
    for ticket in filtered {
        println!("{}  [{}]  {}", ticket.id, ticket.status.label(), ticket.title);
        println!(
            "    {} ({}) - aberto em {} - {} resposta(s)",
            ticket.name,
            ticket.sector,
            format_date(&ticket.created_at),
            ticket.responses.len()
        );
    }
}

fn parse_status_filter(value: Option<&str>) -> AppResult<Option<TicketStatus>> {
    match value {
        None => Ok(None),
        Some(raw) => TicketStatus::from_str(raw).map(Some).ok_or_else(|| {
            AppError::Validation(format!(
                "status inválido '{raw}'; use open, pending ou resolved"
            ))
        }),
    }
}

fn validate_input(input: &TicketInput) -> AppResult<()> {
    let required = [
        &input.name,
        &input.sector,
        &input.title,
        &input.description,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(AppError::Validation(
            "Preencha todos os campos para criar um chamado".to_string(),
        ));
    }
    Ok(())
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y às %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, sector: &str, title: &str, description: &str) -> TicketInput {
        TicketInput {
            name: name.to_string(),
            sector: sector.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn accepts_complete_input() {
        assert!(validate_input(&input("Ana", "TI", "VPN down", "Cannot connect")).is_ok());
    }

    #[test]
    fn rejects_missing_and_whitespace_fields() {
        let cases = [
            input("", "TI", "VPN down", "Cannot connect"),
            input("Ana", "   ", "VPN down", "Cannot connect"),
            input("Ana", "TI", "", "Cannot connect"),
            input("Ana", "TI", "VPN down", "\t\n"),
        ];
        for case in cases {
            assert!(matches!(
                validate_input(&case),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn parses_status_filter() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(
            parse_status_filter(Some("pending")).unwrap(),
            Some(TicketStatus::Pending)
        );
        assert!(matches!(
            parse_status_filter(Some("fechado")),
            Err(AppError::Validation(_))
        ));
    }
}
