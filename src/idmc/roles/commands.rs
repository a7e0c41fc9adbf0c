//! Role command handlers

use log::debug;

use crate::cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, UpdateResource,
};
use crate::idmc::reconcile::PrivilegeSet;
use crate::idmc::roles::RoleFilter;
use crate::idmc::IdmcClient;
use crate::output::{output_reconciliation_plan, output_role, output_roles};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the get role command
pub async fn run_get_role_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Role(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let quiet = client.is_batch_mode();

    if let Some(id) = &args.id {
        debug!("Getting role by id '{}'", id);
        let spinner = create_spinner(&format!("Fetching role '{}'...", id), quiet);
        let result = client.get_role(id).await;
        finish_spinner(spinner);

        let role = result?.ok_or_else(|| format!("Role '{}' not found", id))?;
        output_role(&role, &args.output);
        return Ok(());
    }

    if let Some(name) = &args.name {
        debug!("Getting role by name '{}'", name);
        let spinner = create_spinner(&format!("Fetching role '{}'...", name), quiet);
        let result = client.get_role_by_name(name).await;
        finish_spinner(spinner);

        let role = result?.ok_or_else(|| format!("Role '{}' not found", name))?;
        output_role(&role, &args.output);
        return Ok(());
    }

    let spinner = create_spinner("Fetching roles...", quiet);
    let result = client
        .list_roles(&RoleFilter::All, args.with_privileges)
        .await;
    finish_spinner(spinner);

    let mut roles = result?;
    roles.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));

    output_roles(&roles, args.with_privileges, &args.output);
    Ok(())
}

/// Run the create role command
pub async fn run_create_role_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Role(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let privileges: PrivilegeSet = args.privileges.iter().cloned().collect();

    let spinner = create_spinner(
        &format!("Creating role '{}'...", args.name),
        client.is_batch_mode(),
    );
    let result = client
        .create_role(&args.name, args.description.as_deref(), &privileges)
        .await;
    finish_spinner(spinner);

    let role = result?;
    eprintln!("✓ Created role '{}' ({})", role.name(), role.id);
    output_role(&role, &args.output);
    Ok(())
}

/// Run the update role command
///
/// The role's current privileges are read back and the given set becomes
/// the complete desired set.
pub async fn run_update_role_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Role(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let quiet = client.is_batch_mode();

    let spinner = create_spinner(&format!("Fetching role '{}'...", args.id), quiet);
    let result = client.get_role(&args.id).await;
    finish_spinner(spinner);

    let role = result?.ok_or_else(|| format!("Role '{}' not found", args.id))?;
    let previous = role.privilege_ids();
    let desired: PrivilegeSet = args.privileges.iter().cloned().collect();

    let spinner = create_spinner(
        &format!("Updating privileges of role '{}'...", role.name()),
        quiet,
    );
    let result = client
        .update_role_privileges(&role.id, &desired, &previous)
        .await;
    finish_spinner(spinner);

    let plan = result?;
    if plan.is_empty() {
        eprintln!("Role '{}' already has the requested privileges", role.name());
    } else {
        eprintln!(
            "✓ Updated role '{}': {} added, {} removed",
            role.name(),
            plan.to_add.len(),
            plan.to_remove.len()
        );
    }

    output_reconciliation_plan(&role.id, &plan, &args.output);
    Ok(())
}

/// Run the delete role command
pub async fn run_delete_role_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Role(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!("Delete role {}?", args.id);
    if !confirm_action(&prompt, args.yes || client.is_batch_mode())? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Deleting role {}...", args.id),
        client.is_batch_mode(),
    );
    let result = client.delete_role(&args.id).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Deleted role {}", args.id);
    Ok(())
}
