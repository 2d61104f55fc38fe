//! HTML views rendered with Tera.
//!
//! Templates are embedded at compile time and compiled once at startup.

use gymcoach_core::muscle_group::MuscleGroup;
use gymcoach_core::workout::Workout;
use serde::Serialize;
use tera::{Context, Tera};

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const HOME_TEMPLATE: &str = include_str!("../templates/home.html");
const WORKOUT_TEMPLATE: &str = include_str!("../templates/workout.html");

/// A group choice offered in the page navigation and selector.
#[derive(Debug, Serialize)]
struct GroupOption {
    key: &'static str,
    name: &'static str,
}

fn group_options() -> Vec<GroupOption> {
    MuscleGroup::ALL
        .into_iter()
        .map(|g| GroupOption {
            key: g.key(),
            name: g.display_name(),
        })
        .collect()
}

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the embedded templates. Fails on template syntax errors.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("home.html", HOME_TEMPLATE),
            ("workout.html", WORKOUT_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Landing page.
    pub fn render_home(&self, exercise_count: i64) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("exercise_count", &exercise_count);
        context.insert("available_groups", &group_options());
        self.tera.render("home.html", &context)
    }

    /// Workout page for an assembled workout and the size that was requested.
    pub fn render_workout(&self, workout: &Workout, size: usize) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("workout_name", &workout.workout_name);
        context.insert("group", workout.group());
        context.insert("group_key", workout.muscle_group.key());
        context.insert("exercises", &workout.exercises);
        context.insert("available_groups", &group_options());
        context.insert("size", &size);
        self.tera.render("workout.html", &context)
    }
}
