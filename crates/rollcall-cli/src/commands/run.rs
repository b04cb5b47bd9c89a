//! The `rollcall run` command: the interactive menu loop.
//!
//! The loop is a thin collaborator over the attendance book. All parsing of
//! user input happens here; invalid input prints a notice and the loop
//! continues. EOF on stdin ends the session the same way menu choice 3 does.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, Timelike};

use rollcall_core::book::AttendanceBook;
use rollcall_core::model::StudentId;
use rollcall_core::roster;

type InputLines = io::Lines<io::StdinLock<'static>>;

pub fn execute(records: PathBuf, roster_path: Option<PathBuf>) -> Result<()> {
    let mut book = AttendanceBook::open(records);

    if let Some(path) = roster_path {
        let students = roster::load_roster(&path)?;
        for warning in roster::validate_roster(&students) {
            println!("WARNING: {}", warning.message);
        }
        for student in students {
            book.add_student(student.id, student.name);
        }
        println!(
            "Loaded {} students from {}",
            book.roster().len(),
            path.display()
        );
    }

    println!("Welcome to the Attendance System");

    let mut input = io::stdin().lock().lines();

    loop {
        println!();
        println!("Menu:");
        println!("1. Mark Attendance");
        println!("2. Display Attendance Records");
        println!("3. Exit");

        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                if !mark_attendance(&mut book, &mut input)? {
                    return Ok(());
                }
            }
            "2" => display(&book),
            "3" => {
                println!("Exiting program");
                return Ok(());
            }
            _ => println!("Invalid choice. Please enter a valid option."),
        }
    }
}

/// Prompt for and record one mark. Returns `Ok(false)` on EOF.
fn mark_attendance(book: &mut AttendanceBook, input: &mut InputLines) -> Result<bool> {
    let Some(id_line) = prompt(input, "Enter student ID: ")? else {
        return Ok(false);
    };
    let Ok(student_id) = id_line.trim().parse::<StudentId>() else {
        println!("Invalid student ID. Please enter a number.");
        return Ok(true);
    };

    let Some(present_line) = prompt(input, "Is the student present? (true/false): ")? else {
        return Ok(false);
    };
    let Ok(present) = present_line.trim().parse::<bool>() else {
        println!("Invalid input. Please enter true or false.");
        return Ok(true);
    };

    // Wall-clock time, truncated to the second precision of the records
    // file so memory and disk agree within a run.
    let now = Local::now().naive_local();
    let now = now.with_nanosecond(0).unwrap_or(now);

    match book.mark(student_id, present, now) {
        Ok(()) => println!("Attendance marked for Student ID {student_id}"),
        Err(e) => println!("{e}"),
    }
    Ok(true)
}

fn display(book: &AttendanceBook) {
    println!("Attendance Records:");
    for line in book.display_lines() {
        println!("{line}");
    }
}

fn prompt(input: &mut InputLines, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
