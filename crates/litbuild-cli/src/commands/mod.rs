//! CLI command implementations.

use anyhow::Result;
use litbuild_config::{LanguageRegistry, ModelRequest, load_project_model};
use litbuild_core::{DirRepository, ProjectModel};

pub fn validate(request: &ModelRequest, project_dir: &str, file: Option<&str>) -> Result<()> {
    let outcome = match file {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            litbuild_config::yaml::parse(&bytes)
                .and_then(|document| request.builder().build(&document))
        }
        None => {
            let repository = DirRepository::new(project_dir);
            load_project_model(request, &repository, &LanguageRegistry::new())
        }
    };

    match outcome {
        Ok(_) => {
            println!("Document is valid");
            Ok(())
        }
        Err(e) => {
            println!("Document error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn show(request: &ModelRequest, project_dir: &str) -> Result<()> {
    let model = load(request, project_dir)?;

    println!("Environments:");
    for environment in &model.environments {
        println!("  {}", environment);
        for (key, value) in environment.variables() {
            println!("    {}={}", key, value);
        }
    }

    println!("Build:");
    for (environment, commands) in &model.build {
        println!("  {}", environment);
        for command in commands {
            println!("    {}", command);
        }
    }

    println!("Tasks:");
    for (name, commands) in &model.tasks {
        println!("  {}", name);
        for command in commands {
            println!("    {}", command);
        }
    }

    Ok(())
}

pub fn tasks(request: &ModelRequest, project_dir: &str, json: bool) -> Result<()> {
    let model = load(request, project_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model.tasks)?);
    } else {
        for (name, commands) in &model.tasks {
            println!("{} ({} commands)", name, commands.len());
        }
    }

    Ok(())
}

fn load(request: &ModelRequest, project_dir: &str) -> Result<ProjectModel> {
    let repository = DirRepository::new(project_dir);
    Ok(load_project_model(
        request,
        &repository,
        &LanguageRegistry::new(),
    )?)
}
