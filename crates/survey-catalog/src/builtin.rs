//! Built-in catalog: the 2026 user survey
//!
//! Three scales with different ranges (Usability 1-5, Design 1-7,
//! Funktion 0-4), three questions each, q3 and q8 reverse-scored.

use crate::{Catalog, CatalogError, Question, Scale};

impl Catalog {
    /// The 2026 user survey
    #[must_use]
    pub fn builtin() -> Self {
        // The table below satisfies every builder check.
        match builtin_builder() {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("built-in catalog is invalid: {e}"),
        }
    }
}

fn builtin_builder() -> Result<Catalog, CatalogError> {
    Catalog::builder()
        .scale(
            Scale::new("Usability", 1, 5)
                .with_labels("stimme gar nicht zu", "stimme voll zu"),
        )
        .scale(
            Scale::new("Design", 1, 7)
                .with_labels("trifft überhaupt nicht zu", "trifft voll und ganz zu"),
        )
        .scale(Scale::new("Funktion", 0, 4).with_labels("nie", "immer"))
        // Usability
        .question(Question::new(
            "q1",
            "Usability",
            "Die Bedienung der App ist intuitiv und leicht verständlich.",
        ))
        .question(Question::new(
            "q2",
            "Usability",
            "Ich finde mich in der Navigation schnell zurecht.",
        ))
        .question(
            Question::new(
                "q3",
                "Usability",
                "Aufgaben lassen sich nur mit viel Nachdenken erledigen.",
            )
            .reversed(),
        )
        // Design
        .question(Question::new(
            "q4",
            "Design",
            "Das visuelle Erscheinungsbild ist modern und ansprechend.",
        ))
        .question(Question::new(
            "q5",
            "Design",
            "Die Farben und Typografie unterstützen die Lesbarkeit gut.",
        ))
        .question(Question::new(
            "q6",
            "Design",
            "Das Layout wirkt aufgeräumt und nicht überladen.",
        ))
        // Funktion
        .question(Question::new(
            "q7",
            "Funktion",
            "Die angebotenen Funktionen erfüllen meine Erwartungen vollständig.",
        ))
        .question(
            Question::new(
                "q8",
                "Funktion",
                "Die Anwendung reagiert sehr träge auf meine Eingaben.",
            )
            .reversed(),
        )
        .question(Question::new(
            "q9",
            "Funktion",
            "Es gibt keine störenden Fehler oder Abstürze bei der Nutzung.",
        ))
        .build()
}
