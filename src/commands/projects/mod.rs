pub mod types;
pub mod util;

use anyhow::Result;
use clap::Parser;

use self::util::{confirm_project_access, format_project_list, get_projects, ProjectAccess};
use crate::config::EXEC_NAME;
use crate::state::State;
use crate::store::session::context_nickname;

#[derive(Debug, Parser)]
#[clap(about = "Display the current project and all projects you have access to")]
pub struct Options {
    #[clap(
        short = 'q',
        long = "short",
        help = "If true, display only the project names"
    )]
    pub short: bool,
}

pub async fn handle(options: &Options, state: State) -> Result<()> {
    let context = state.session.current_context();

    let current_project = context
        .map(|context| context.namespace.clone())
        .unwrap_or_default();

    let nickname = context
        .map(|context| context_nickname(&context.namespace, &context.cluster, &context.user))
        .unwrap_or_default();

    // single best effort check, skipped when nothing is selected
    let access = if current_project.is_empty() {
        None
    } else {
        Some(confirm_project_access(&state.http, &current_project).await)
    };

    let current_exists = matches!(access, Some(ProjectAccess::Accessible));

    let projects = get_projects(&state.http).await?;

    let msg = format_project_list(
        &projects,
        current_exists.then_some(current_project.as_str()),
        options.short,
        EXEC_NAME,
    );

    if !(options.short && projects.is_empty()) {
        println!("{msg}");
    }

    if projects.is_empty() || options.short {
        return Ok(());
    }

    match access {
        Some(ProjectAccess::Accessible) => {
            let server = state.http.base_url.clone().unwrap_or_default();

            // operators never chose a generated context name, so only show it
            // when the context was named by hand
            if state.session.current_context == nickname {
                println!("\nUsing project {current_project:?} on server {server:?}.");
            } else {
                println!(
                    "\nUsing project {current_project:?} from context named {:?} on server {server:?}.",
                    state.session.current_context
                );
            }

            Ok(())
        }

        Some(ProjectAccess::Forbidden(error)) => {
            println!(
                "You do not have rights to view project {current_project:?}. Please switch to an existing one."
            );

            Err(error)
        }

        Some(ProjectAccess::NotFound(error) | ProjectAccess::Other(error)) => Err(error),

        // nothing selected, the listing is all there is to say
        None => Ok(()),
    }
}
