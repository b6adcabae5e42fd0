use crate::{
    cli::{display_contact, display_groups},
    prelude::{
        AppError, Change, ContactManager,
        command::{Cli, Commands},
        storage::{StorageMedium, open_storage},
        validation::{new_contact, validate_edit},
    },
};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let medium = StorageMedium::from(&cli.storage)?;
    let manager = ContactManager::new(open_storage(medium, &cli.data_dir));
    info!(medium = medium.is_which(), data_dir = %cli.data_dir, "storage opened");

    execute(cli.command, &manager)
}

pub fn execute(command: Commands, manager: &ContactManager) -> Result<(), AppError> {
    match command {
        Commands::Add {
            first_name,
            last_name,
            phone,
        } => {
            let contact = new_contact(&first_name, &last_name, &phone)?;

            match manager.add(contact) {
                Change::Saved => {
                    println!("Contact added successfully");
                    Ok(())
                }
                _ => Err(AppError::NotSaved("contact".to_string())),
            }
        }

        // Listing contacts
        Commands::List { sort } => {
            let groups = manager.grouped(sort);
            if groups.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            print!("{}", display_groups(&groups, sort));
            Ok(())
        }

        Commands::Show { id } => {
            match manager.find(&id) {
                Some(contact) => println!("{}", display_contact(&contact)),
                None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
            }
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            first_name,
            last_name,
            phone,
        } => {
            let Some(current) = manager.find(&id) else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            };

            let replacement = validate_edit(&current, first_name, last_name, phone)?;

            report(manager.edit(&current, replacement), "Contact updated successfully")
        }

        // Delete Contact
        Commands::Delete {
            id,
            first_name,
            last_name,
            phone,
        } => {
            let target = match (id, first_name, last_name, phone) {
                (Some(id), _, _, _) => manager.find(&id),
                // Stored fields are trimmed
                (None, Some(first), Some(last), Some(phone)) => {
                    manager.find_by_fields(first.trim(), last.trim(), phone.trim())
                }
                _ => {
                    return Err(AppError::Validation(
                        "Provide --id, or --first-name, --last-name and --phone".to_string(),
                    ));
                }
            };

            let change = match target {
                Some(contact) => manager.delete(&contact),
                None => Change::NoMatch,
            };
            report(change, "Contact deleted successfully")
        }
    }
}

fn report(change: Change, success: &str) -> Result<(), AppError> {
    match change {
        Change::Saved => println!("{success}"),
        Change::NoMatch => eprintln!("{}", AppError::NotFound("Contact".to_string())),
        Change::NotSaved => return Err(AppError::NotSaved("contact".to_string())),
    }
    Ok(())
}
