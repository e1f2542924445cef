use crate::cli::parser::PersonAction;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_person, load_persons};
use crate::errors::AppResult;
use crate::models::person::Person;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(action: &PersonAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        PersonAction::Add { name, title } => {
            let person = Person {
                id: 0,
                name: name.clone(),
                title: title.clone(),
            };
            let id = insert_person(&pool.conn, &person)?;
            audit(
                &pool.conn,
                "person-add",
                &format!("person {}", id),
                &format!("{} ({})", name, title),
            )?;
            success(format!("Added person {} ({})", id, name));
        }

        PersonAction::List => {
            let persons = load_persons(&pool.conn)?;
            if persons.is_empty() {
                info("Roster is empty.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "NAME", "TITLE"]);
            for p in persons {
                table.add_row(vec![p.id.to_string(), p.name, p.title]);
            }
            print!("{}", table.render(cfg.separator()));
        }
    }
    Ok(())
}
