use crate::{
    db::{db::Db, tasks::Tasks},
    libs::messages::Message,
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    id: i32,
}

pub fn cmd(db: &Db, args: ToggleArgs) -> Result<()> {
    let tasks = Tasks::new(db);
    let mut task = match tasks.get_by_id(args.id) {
        Ok(task) => task,
        Err(e) if e.is_not_found() => msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id)),
        Err(e) => return Err(e.into()),
    };

    task.toggle();
    tasks.update(&mut task)?;

    if task.task_completed {
        msg_success!(Message::TaskCompleted(args.id));
    } else {
        msg_success!(Message::TaskReopened(args.id));
    }
    Ok(())
}
