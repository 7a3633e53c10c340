use lazy_static::lazy_static;

use super::exercises_model::{Exercise, ExerciseFilter, FitnessLevel};

fn exercise(
    id: &str,
    name: &str,
    instructions: &str,
    image: &str,
    equipment: &[&str],
    target_muscles: &[&str],
    difficulty: FitnessLevel,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        instructions: instructions.to_string(),
        image_url: Some(format!("/images/{}.png", image)),
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
        target_muscles: target_muscles.iter().map(|m| m.to_string()).collect(),
        difficulty,
    }
}

lazy_static! {
    /// Built-in exercise catalog.
    pub static ref EXERCISE_LIBRARY: Vec<Exercise> = vec![
        exercise(
            "1",
            "Push Up",
            "1. Start in a plank position. 2. Lower your body until your chest nearly touches the floor. 3. Push back up to the starting position.",
            "push-up",
            &["Bodyweight"],
            &["Chest", "Shoulders", "Triceps"],
            FitnessLevel::Beginner,
        ),
        exercise(
            "2",
            "Squat",
            "1. Stand with your feet shoulder-width apart. 2. Lower your hips as if sitting in a chair. 3. Keep your chest up and back straight. 4. Return to the starting position.",
            "squat",
            &["Bodyweight", "Barbell", "Dumbbells"],
            &["Quads", "Glutes", "Hamstrings"],
            FitnessLevel::Beginner,
        ),
        exercise(
            "3",
            "Plank",
            "1. Hold a push-up position with your forearms on the ground. 2. Keep your body in a straight line from head to heels. 3. Engage your core.",
            "plank",
            &["Bodyweight"],
            &["Core", "Abs"],
            FitnessLevel::Beginner,
        ),
        exercise(
            "4",
            "Bicep Curl",
            "1. Stand or sit holding dumbbells with an underhand grip. 2. Curl the weights up towards your shoulders. 3. Lower slowly.",
            "bicep-curl",
            &["Dumbbells", "Barbell"],
            &["Biceps"],
            FitnessLevel::Beginner,
        ),
        exercise(
            "5",
            "Lunge",
            "1. Step forward with one leg. 2. Lower your hips until both knees are bent at a 90-degree angle. 3. Push back to the starting position. Repeat with the other leg.",
            "lunge",
            &["Bodyweight", "Dumbbells"],
            &["Quads", "Glutes", "Hamstrings"],
            FitnessLevel::Intermediate,
        ),
        exercise(
            "6",
            "Deadlift",
            "1. Stand with feet hip-width apart, barbell over midfoot. 2. Hinge at hips, slight knee bend, grip bar outside knees. 3. Keep back straight, chest up. 4. Lift by extending hips and knees, keeping bar close to body. 5. Lower by reversing motion.",
            "deadlift",
            &["Barbell"],
            &["Back", "Glutes", "Hamstrings", "Core"],
            FitnessLevel::Advanced,
        ),
    ];
}

pub fn get_exercise(exercise_id: &str) -> Option<&'static Exercise> {
    EXERCISE_LIBRARY.iter().find(|e| e.id == exercise_id)
}

pub fn find_exercises(filter: &ExerciseFilter) -> Vec<Exercise> {
    EXERCISE_LIBRARY
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}
