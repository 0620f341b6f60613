use clap::Args;
use tiffin::student::{CLASS_OPTIONS, Student, StudentError};
use tiffin_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Student's full name
    #[arg(long)]
    name: String,

    /// Admission number
    #[arg(long)]
    admission_number: String,

    /// Class, e.g. "CS 2nd Year"
    #[arg(long)]
    class: String,
}

pub(crate) fn register(context: &AppContext, args: RegisterArgs) -> Result<(), String> {
    let student = match Student::new(&args.name, &args.admission_number, &args.class) {
        Ok(student) => student,
        Err(StudentError::UnknownClass(class)) => {
            return Err(format!(
                "unknown class {class:?}; choose one of: {}",
                CLASS_OPTIONS.join(", ")
            ));
        }
        Err(error) => return Err(format!("invalid student details: {error}")),
    };

    context
        .identity
        .save(&student)
        .map_err(|error| format!("failed to save the identity: {error}"))?;

    println!(
        "registered {} ({}, {})",
        student.name(),
        student.admission_number(),
        student.class()
    );

    Ok(())
}

#[derive(Debug, Args)]
pub(crate) struct WhoamiArgs {
    /// Forget the saved identity
    #[arg(long)]
    clear: bool,
}

pub(crate) fn whoami(context: &AppContext, args: WhoamiArgs) -> Result<(), String> {
    if args.clear {
        context
            .identity
            .clear()
            .map_err(|error| format!("failed to clear the identity: {error}"))?;

        println!("identity cleared");

        return Ok(());
    }

    let student = context
        .identity
        .load()
        .map_err(|error| format!("failed to read the identity: {error}"))?;

    match student {
        Some(student) => {
            println!("name: {}", student.name());
            println!("admission_number: {}", student.admission_number());
            println!("class: {}", student.class());
        }
        None => println!("no identity saved; run `tiffin register` first"),
    }

    Ok(())
}
