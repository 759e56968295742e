use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SecurityQuestion {
    pub id: u32,
    pub question: &'static str,
}

pub const SECURITY_QUESTIONS: &[SecurityQuestion] = &[
    SecurityQuestion {
        id: 1,
        question: "¿Cuál es el nombre de tu primera mascota?",
    },
    SecurityQuestion {
        id: 2,
        question: "¿En qué ciudad naciste?",
    },
    SecurityQuestion {
        id: 3,
        question: "¿Cuál es el segundo nombre de tu madre?",
    },
    SecurityQuestion {
        id: 4,
        question: "¿Cómo se llamaba tu escuela primaria?",
    },
    SecurityQuestion {
        id: 5,
        question: "¿Cuál fue la marca de tu primer auto?",
    },
    SecurityQuestion {
        id: 6,
        question: "¿Cuál es tu comida favorita?",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::SECURITY_QUESTIONS;

    #[test]
    fn ids_are_sequential_and_questions_unique() {
        for (index, entry) in SECURITY_QUESTIONS.iter().enumerate() {
            assert_eq!(entry.id as usize, index + 1);
        }
        let unique: HashSet<_> = SECURITY_QUESTIONS.iter().map(|q| q.question).collect();
        assert_eq!(unique.len(), SECURITY_QUESTIONS.len());
    }
}
