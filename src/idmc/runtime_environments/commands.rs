//! Runtime environment command handlers

use log::debug;

use crate::cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, UpdateResource,
};
use crate::idmc::runtime_environments::RuntimeEnvironmentAgent;
use crate::idmc::IdmcClient;
use crate::output::{output_runtime_environment, output_runtime_environments};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the get rte command
pub async fn run_get_rte_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Rte(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let quiet = client.is_batch_mode();

    if let Some(id) = &args.id {
        debug!("Getting runtime environment '{}'", id);
        let spinner = create_spinner(&format!("Fetching runtime environment '{}'...", id), quiet);
        let result = client.get_runtime_environment(id).await;
        finish_spinner(spinner);

        let rte = result?.ok_or_else(|| format!("Runtime environment '{}' not found", id))?;
        output_runtime_environment(&rte, &args.output);
        return Ok(());
    }

    let spinner = create_spinner("Fetching runtime environments...", quiet);
    let result = client.list_runtime_environments().await;
    finish_spinner(spinner);

    let mut rtes = result?;
    rtes.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));

    output_runtime_environments(&rtes, &args.output);
    Ok(())
}

/// Run the create rte command
pub async fn run_create_rte_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Rte(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Creating runtime environment '{}'...", args.name),
        client.is_batch_mode(),
    );
    let result = client
        .create_runtime_environment(&args.name, args.shared)
        .await;
    finish_spinner(spinner);

    let rte = result?;
    eprintln!("✓ Created runtime environment '{}' ({})", rte.name(), rte.id);
    output_runtime_environment(&rte, &args.output);
    Ok(())
}

/// Run the update rte command
///
/// Reads the current environment so options that are not given keep their
/// value; `--agent` replaces the whole agent list.
pub async fn run_update_rte_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Rte(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let quiet = client.is_batch_mode();

    let spinner = create_spinner(&format!("Fetching runtime environment '{}'...", args.id), quiet);
    let result = client.get_runtime_environment(&args.id).await;
    finish_spinner(spinner);

    let current = result?.ok_or_else(|| format!("Runtime environment '{}' not found", args.id))?;

    let name = args.name.as_deref().unwrap_or(current.name());
    let shared = args.shared.unwrap_or(current.is_shared());
    let agents: Vec<RuntimeEnvironmentAgent> = if args.agents.is_empty() {
        current.agents.clone()
    } else {
        let org_id = current
            .org_id
            .clone()
            .or_else(|| client.session().org_id.clone());
        args.agents
            .iter()
            .map(|id| RuntimeEnvironmentAgent {
                id: id.clone(),
                org_id: org_id.clone(),
                name: None,
            })
            .collect()
    };

    let spinner = create_spinner(
        &format!("Updating runtime environment '{}'...", current.name()),
        quiet,
    );
    let result = client
        .update_runtime_environment(&current.id, name, shared, &agents)
        .await;
    finish_spinner(spinner);

    let rte = result?;
    eprintln!("✓ Updated runtime environment '{}' ({})", rte.name(), rte.id);
    output_runtime_environment(&rte, &args.output);
    Ok(())
}

/// Run the delete rte command
pub async fn run_delete_rte_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Rte(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!("Delete runtime environment {}?", args.id);
    if !confirm_action(&prompt, args.yes || client.is_batch_mode())? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Deleting runtime environment {}...", args.id),
        client.is_batch_mode(),
    );
    let result = client.delete_runtime_environment(&args.id).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Deleted runtime environment {}", args.id);
    Ok(())
}
