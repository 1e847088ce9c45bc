//! Menu-driven interactive shell.
//!
//! # Responsibility
//! - Map menu selections onto task service calls.
//! - Render task snapshots and store errors as console lines.
//!
//! # Invariants
//! - The shell never panics on user input; bad input re-prompts.
//! - Store errors are reported and the menu loop continues.
//! - End of input ends the session cleanly.

use log::debug;
use std::io::{self, BufRead, Write};
use taskpad_core::{Task, TaskId, TaskRepository, TaskService};

const MENU_WIDTH: usize = 40;
const LIST_RULE_WIDTH: usize = 50;

const MENU_ENTRIES: [&str; 7] = [
    "Add Task",
    "View Task List",
    "Update Task",
    "Delete Task",
    "Mark Task Complete",
    "Mark Task Incomplete",
    "Exit",
];

/// Runs the interactive menu loop until the user exits or input ends.
pub fn run_shell<R, In, Out>(
    service: &mut TaskService<R>,
    input: &mut In,
    output: &mut Out,
) -> io::Result<()>
where
    R: TaskRepository,
    In: BufRead,
    Out: Write,
{
    debug!("event=shell_start module=cli status=ok");
    writeln!(output, "Welcome to Taskpad!")?;

    loop {
        write_menu(output)?;
        let Some(line) = prompt(input, output, "Enter your choice (1-7): ")? else {
            break;
        };

        match line.trim().parse::<u32>() {
            Ok(7) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Ok(1) => handle_add(service, input, output)?,
            Ok(2) => handle_view(service, output)?,
            Ok(3) => handle_update(service, input, output)?,
            Ok(4) => handle_delete(service, input, output)?,
            Ok(5) => handle_mark(service, input, output, true)?,
            Ok(6) => handle_mark(service, input, output, false)?,
            _ => writeln!(
                output,
                "Invalid choice. Please enter a number between 1 and 7."
            )?,
        }
    }

    debug!("event=shell_exit module=cli status=ok");
    Ok(())
}

fn handle_add<R, In, Out>(
    service: &mut TaskService<R>,
    input: &mut In,
    output: &mut Out,
) -> io::Result<()>
where
    R: TaskRepository,
    In: BufRead,
    Out: Write,
{
    let Some(description) = prompt(input, output, "Enter task description: ")? else {
        return Ok(());
    };

    match service.add_task(&description) {
        Ok(task) => writeln!(output, "Task added successfully with ID {}.", task.id),
        Err(err) => writeln!(output, "Error: {err}"),
    }
}

fn handle_view<R, Out>(service: &TaskService<R>, output: &mut Out) -> io::Result<()>
where
    R: TaskRepository,
    Out: Write,
{
    let tasks = service.list_tasks();
    if tasks.is_empty() {
        writeln!(output, "\nYour task list is empty.")?;
        return Ok(());
    }

    writeln!(output, "\nYour Tasks:")?;
    writeln!(output, "{}", "-".repeat(LIST_RULE_WIDTH))?;
    for task in &tasks {
        writeln!(output, "{}", render_task_line(task))?;
    }
    writeln!(output, "{}", "-".repeat(LIST_RULE_WIDTH))
}

fn handle_update<R, In, Out>(
    service: &mut TaskService<R>,
    input: &mut In,
    output: &mut Out,
) -> io::Result<()>
where
    R: TaskRepository,
    In: BufRead,
    Out: Write,
{
    let Some(id) = prompt_for_id(input, output, "Enter task ID to update: ")? else {
        return Ok(());
    };

    if service.get_task(id).is_err() {
        return writeln!(output, "Task with ID {id} not found.");
    }

    let Some(new_description) =
        prompt(input, output, &format!("Enter new description for task {id}: "))?
    else {
        return Ok(());
    };

    match service.update_description(id, &new_description) {
        Ok(_) => writeln!(output, "Task {id} updated successfully."),
        Err(err) => writeln!(output, "Error: {err}"),
    }
}

fn handle_delete<R, In, Out>(
    service: &mut TaskService<R>,
    input: &mut In,
    output: &mut Out,
) -> io::Result<()>
where
    R: TaskRepository,
    In: BufRead,
    Out: Write,
{
    let Some(id) = prompt_for_id(input, output, "Enter task ID to delete: ")? else {
        return Ok(());
    };

    let task = match service.get_task(id) {
        Ok(task) => task,
        Err(_) => return writeln!(output, "Task with ID {id} not found."),
    };

    let Some(answer) = prompt(
        input,
        output,
        &format!(
            "Are you sure you want to delete task '{}'? (y/n): ",
            task.description
        ),
    )?
    else {
        return Ok(());
    };

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        match service.delete_task(id) {
            Ok(()) => writeln!(output, "Task {id} deleted successfully."),
            Err(err) => writeln!(output, "Error: {err}"),
        }
    } else {
        writeln!(output, "Deletion cancelled.")
    }
}

fn handle_mark<R, In, Out>(
    service: &mut TaskService<R>,
    input: &mut In,
    output: &mut Out,
    completed: bool,
) -> io::Result<()>
where
    R: TaskRepository,
    In: BufRead,
    Out: Write,
{
    let verb = if completed { "complete" } else { "incomplete" };
    let Some(id) = prompt_for_id(input, output, &format!("Enter task ID to mark {verb}: "))?
    else {
        return Ok(());
    };

    let marked = if completed {
        service.mark_complete(id)
    } else {
        service.mark_incomplete(id)
    };

    match marked {
        Ok(task) => writeln!(output, "Task {} marked as {verb}.", task.id),
        Err(_) => writeln!(output, "Task with ID {id} not found."),
    }
}

fn write_menu<Out: Write>(output: &mut Out) -> io::Result<()> {
    let rule = "=".repeat(MENU_WIDTH);
    writeln!(output, "\n{rule}")?;
    writeln!(output, "Taskpad - Main Menu")?;
    writeln!(output, "{rule}")?;
    for (index, entry) in MENU_ENTRIES.iter().enumerate() {
        writeln!(output, "{}. {entry}", index + 1)?;
    }
    writeln!(output, "{rule}")
}

fn render_task_line(task: &Task) -> String {
    let status = if task.completed { "[x]" } else { "[ ]" };
    format!("ID: {} | {status} {}", task.id, task.description)
}

/// Writes a prompt and reads one line. `None` means end of input.
fn prompt<In, Out>(input: &mut In, output: &mut Out, text: &str) -> io::Result<Option<String>>
where
    In: BufRead,
    Out: Write,
{
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

fn prompt_for_id<In, Out>(
    input: &mut In,
    output: &mut Out,
    text: &str,
) -> io::Result<Option<TaskId>>
where
    In: BufRead,
    Out: Write,
{
    let Some(line) = prompt(input, output, text)? else {
        return Ok(None);
    };

    match line.trim().parse::<TaskId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(output, "Invalid task ID. Please enter a number.")?;
            Ok(None)
        }
    }
}

fn read_line<In: BufRead>(input: &mut In) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
