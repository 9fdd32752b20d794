//! Authored content tables: teaching scripts, assessment and validation
//! questions, the quiz bank, learning-style questionnaire, and sample goals.
//!
//! Everything here is immutable literal data. Lookups are explicit matches so
//! the "topic has no script" path is a visible branch, not a missing key.

use crate::domain::{
    Difficulty, LearningGoal, LearningStyle, Level, QuizQuestion, StyleAnswer, StyleQuestion,
    Topic,
};

/// Profiling questions asked during the first chat turns.
pub const ASSESSMENT_QUESTIONS: [&str; 3] = [
    "What's your learning style? Visual (diagrams), Auditory (explanations), or Kinesthetic (practice)?",
    "How much time can you spend learning per day? (Quick lessons vs deep dives)",
    "What's your current knowledge level in this subject? Beginner, Intermediate, or Advanced?",
];

const PHOTOSYNTHESIS_BEGINNER: &str = r#"🌱 **Let's Start with Photosynthesis!**

Great question! Let me break this down super simply:

**The Basic Idea:**
Plants are like little factories that make their own food using sunlight!

**Three Simple Steps:**
1. ☀️ **Sunlight** - Plants catch sunlight with their green leaves
2. 💧 **Water** - Roots pull water from the soil
3. 💨 **CO2** - Leaves take CO2 from the air
4. ✨ **Magic Happens** - They mix all these together using sunlight energy
5. 🍎 **Result** - Food (sugar) for the plant + Oxygen we breathe!

**Simple Formula:**
Sunlight + Water + CO2 = Sugar + Oxygen

**Now let me check your understanding:**
❓ **Quick Question:** When a plant makes its own food, what gas do you think it releases into the air that we breathe?
A) Carbon Dioxide
B) Nitrogen
C) Oxygen
D) Hydrogen

Reply with just A, B, C, or D!"#;

const PHOTOSYNTHESIS_INTERMEDIATE: &str = r#"🌱 **Deep Dive: Photosynthesis**

Excellent curiosity! Let me explain the mechanism:

**The Two Stages:**

**1️⃣ Light Reactions (in Thylakoid)**
- Chlorophyll absorbs photons
- Water molecules split (photolysis): 2H₂O → 4H⁺ + 4e⁻ + O₂
- Electrons move through electron transport chain
- ATP and NADPH are produced
- O₂ is released as byproduct

**2️⃣ Calvin Cycle (Dark Reactions in Stroma)**
- CO₂ is fixed by RuBisCO enzyme
- 3-phosphoglycerate is reduced
- G3P molecules are formed
- Some G3P regenerates RuBP
- Others build glucose

**Overall Equation:**
6CO₂ + 6H₂O + Light Energy → C₆H₁₂O₆ + 6O₂

**Key Concepts:**
- Photosystems I & II
- Electron transport chain
- Chemiosmosis
- Carbon fixation

❓ **Skill Check:** What's the role of the light reactions in photosynthesis?
A) Directly fix CO₂
B) Produce ATP and NADPH
C) Build glucose molecules
D) All of the above

Let me know your answer (A/B/C/D), and we'll discuss the next level!"#;

const PHOTOSYNTHESIS_ADVANCED: &str = r#"🌱 **Advanced Photosynthesis: Quantum & Ecological Perspectives**

Excellent! You're ready for some advanced concepts:

**Quantum Aspects:**
- Quantum coherence in light-harvesting complexes
- Resonance energy transfer with 100% efficiency
- Excitonic states and decoherence
- Femtosecond spectroscopy findings

**C3, C4, and CAM Pathways:**
- **C3 Plants**: Rice, wheat, soybeans (2 carbons in Calvin cycle)
- **C4 Plants**: Corn, sugarcane (4 carbons initially) - more efficient in hot/dry
- **CAM Plants**: Succulents, cacti - open stomata at night

**Enzyme Kinetics:**
- RuBisCO: ~3 reactions/sec (slow enzyme)
- Carboxylation vs Oxygenation (photorespiration)
- Regulation by ATP, NADPH, ADP

**Ecological Implications:**
- Global carbon fixation: ~200 Gt/year
- Climate change effects on photosynthetic capacity
- Agricultural yield optimization

❓ **Advanced Validation:** Why do C4 plants outcompete C3 plants in hot, dry climates despite C4's extra ATP cost?

Think about stomatal limitations and CO₂ fixation efficiency!"#;

const MATH_BEGINNER: &str = r#"📐 **Let's Solve: 2x + 5 = 15**

Perfect! Let me teach you step-by-step:

**Step 1: Understand the Goal**
We need to find what number x is!

**Step 2: Get x alone**
- Right now: 2x + 5 = 15
- We need to remove the +5
- So subtract 5 from BOTH sides:
  2x + 5 - 5 = 15 - 5
  2x = 10

**Step 3: Divide to find x**
- We have: 2x = 10
- Divide both sides by 2:
  2x ÷ 2 = 10 ÷ 2
  x = 5

**Step 4: Check Your Answer!**
Plug x = 5 back into original:
2(5) + 5 = 10 + 5 = 15 ✅ Correct!

**Key Rule:** Whatever you do to one side, do to the other side!

❓ **Your Turn - Quick Check:**
If 3x + 2 = 14, what is x?
Think about: What do you need to subtract first? Then divide?

Give it a try! Tell me your answer and how you got it! 🎯"#;

const MATH_INTERMEDIATE: &str = r#"📐 **Linear Equations & Systems**

Good level! Let's go deeper:

**Method 1: Substitution**
- Solve one equation for a variable
- Substitute into the other
- Solve the resulting equation

**Method 2: Elimination**
- Multiply equations to align coefficients
- Add/subtract to eliminate a variable
- Solve for remaining variable

**Your Problem: 2x + 5 = 15**
- Isolate term with x: 2x = 15 - 5 = 10
- Divide by coefficient: x = 10/2 = 5

**Related Concepts:**
- Linear vs Non-linear equations
- Slope-intercept form: y = mx + b
- Solving systems: 2x2, 3x3 matrices
- Graphical solutions

**Real-world Applications:**
- Business: Cost-revenue analysis
- Physics: Kinematics equations
- Economics: Supply-demand curves

❓ **Challenge:** Solve this system:
2x + y = 7
x - y = 2

Show me your steps! What method would you use?"#;

const MATH_ADVANCED: &str = r#"📐 **Abstract Algebra & Linear Systems**

You're ready! Deep mathematics ahead:

**Vector Space Approach:**
- Treat equations as vectors in ℝⁿ
- Linear transformation: Ax = b
- Matrix operations and rank
- Determinants and Cramer's rule

**Your Problem in Matrix Form:**
[2][x] = [10]
So: x = 10/2 = 5

**Advanced Topics:**
- Eigenvalues and eigenvectors
- Kernel and image of linear maps
- Rank-nullity theorem
- Gaussian elimination complexity: O(n³)

**Computational Methods:**
- LU decomposition
- QR factorization
- SVD (Singular Value Decomposition)
- Iterative solvers (Jacobi, Gauss-Seidel)

**Applications:**
- Machine learning: Linear regression
- Graphics: 3D transformations
- Engineering: FEM (Finite Element Methods)

❓ **Deep Question:** Why is Gaussian elimination O(n³) and can we do better for sparse matrices?

Let's explore computational complexity! 🔬"#;

const PYTHON_BEGINNER: &str = r#"🐍 **Welcome to Python!**

Awesome! Python is a fantastic language to start programming!

**Why Python?**
- Simple, readable syntax
- Great for beginners
- Powerful for real projects
- Used by everyone (Google, Netflix, NASA!)

**Key Concepts:**
1. **Variables**: Store data (like boxes)
2. **Data Types**: Numbers, Text, True/False
3. **Lists**: Multiple items together
4. **Loops**: Repeat actions
5. **Conditions**: Make decisions

**Your First Program:**
```python
name = "Python Learner"
print("Hello, " + name)
```

**Quick Challenge:**
Can you create a variable with your name and print it?

❓ **Quick Question:** What do you think `print()` does in Python?
A) Sends to printer
B) Shows text on screen
C) Saves to file
D) Stores data

Give it a try! 🎯"#;

const PYTHON_INTERMEDIATE: &str = r#"🐍 **Python Programming - Intermediate**

Great! Let's dive deeper:

**Functions & Loops:**
```python
def greet(name):
    return f"Hello, {name}!"

for i in range(5):
    print(greet("Student"))
```

**Lists & Dictionaries:**
```python
students = ["Alice", "Bob", "Charlie"]
grades = {"Alice": 95, "Bob": 87}
```

**Key Skills:**
- File operations
- Error handling (try-except)
- List comprehensions
- String manipulation

**Best Practices:**
- PEP 8 style guide
- Naming conventions
- Code documentation

❓ **Challenge:** Write a function that takes a list and returns the average!"#;

const PYTHON_ADVANCED: &str = r#"🐍 **Advanced Python & OOP**

You're ready for professional Python!

**Object-Oriented Programming:**
```python
class DataProcessor:
    def __init__(self, data):
        self.data = data

    def process(self):
        return [x * 2 for x in self.data]
```

**Advanced Topics:**
- Decorators & metaclasses
- Generators & iterators
- Async/await programming
- Type hints & annotations

**Libraries & Frameworks:**
- NumPy: Numerical computing
- Pandas: Data analysis
- Django/Flask: Web frameworks
- TensorFlow: Machine learning

**Design Patterns:**
- Singleton, Factory, Observer
- SOLID principles
- Architectural patterns

❓ **Expert Question:** How would you implement a decorator to measure execution time?

Let's build production-grade code! 🚀"#;

/// The authored (topic × level) script table. `General` has no scripts; the
/// caller takes the learning-style-prompt branch instead.
pub fn teaching_script(topic: Topic, level: Level) -> Option<&'static str> {
    let s = match (topic, level) {
        (Topic::Photosynthesis, Level::Beginner) => PHOTOSYNTHESIS_BEGINNER,
        (Topic::Photosynthesis, Level::Intermediate) => PHOTOSYNTHESIS_INTERMEDIATE,
        (Topic::Photosynthesis, Level::Advanced) => PHOTOSYNTHESIS_ADVANCED,
        (Topic::Math, Level::Beginner) => MATH_BEGINNER,
        (Topic::Math, Level::Intermediate) => MATH_INTERMEDIATE,
        (Topic::Math, Level::Advanced) => MATH_ADVANCED,
        (Topic::Python, Level::Beginner) => PYTHON_BEGINNER,
        (Topic::Python, Level::Intermediate) => PYTHON_INTERMEDIATE,
        (Topic::Python, Level::Advanced) => PYTHON_ADVANCED,
        (Topic::General, _) => return None,
    };
    Some(s)
}

/// Comprehension-check questions interleaved into even-count replies.
pub fn validation_questions(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Photosynthesis => &[
            "What are the two main stages of photosynthesis and where do they occur?",
            "Why do plants need both light and darkness for photosynthesis?",
            "How would photosynthesis be affected if there was no CO₂ available?",
        ],
        Topic::Math => &[
            "Can you explain why we do the same operation on both sides of an equation?",
            "What's the difference between a coefficient and a variable?",
            "Can you solve a similar equation on your own?",
        ],
        Topic::Python => &[
            "What's the difference between a list and a dictionary in Python?",
            "Can you explain what a function is and why we use them?",
            "Write a simple Python loop that prints numbers 1-5.",
        ],
        Topic::General => &[],
    }
}

/// Banner placed between the teaching script and the validation question.
pub fn validation_banner(topic: Topic) -> &'static str {
    match topic {
        Topic::Photosynthesis => "🎯 **Before we continue, let me validate your understanding:**",
        Topic::Math => "🎯 **Now let me check your understanding:**",
        _ => "🎯 **Let me check your understanding:**",
    }
}

/// Built-in multiple-choice quiz bank.
pub fn quiz_bank() -> Vec<QuizQuestion> {
    let q = |id: &str, topic, question: &str, options: &[&str], correct, difficulty, explanation: &str| {
        QuizQuestion {
            id: id.into(),
            topic,
            question: question.into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct,
            difficulty,
            explanation: explanation.into(),
        }
    };
    vec![
        q(
            "photo-1",
            Topic::Photosynthesis,
            "What is the primary function of photosynthesis?",
            &[
                "To break down glucose",
                "To convert light energy into chemical energy",
                "To produce CO2",
                "To decrease oxygen in atmosphere",
            ],
            1,
            Difficulty::Easy,
            "Photosynthesis stores light energy in the chemical bonds of glucose.",
        ),
        q(
            "photo-2",
            Topic::Photosynthesis,
            "Which organelle is responsible for photosynthesis?",
            &["Mitochondria", "Chloroplast", "Nucleus", "Ribosome"],
            1,
            Difficulty::Easy,
            "Chloroplasts contain the chlorophyll that captures light.",
        ),
        q(
            "photo-3",
            Topic::Photosynthesis,
            "What are the two main stages of photosynthesis?",
            &[
                "Glycolysis and Krebs cycle",
                "Light reactions and Calvin cycle",
                "Fermentation and oxidation",
                "Glycolysis and Fermentation",
            ],
            1,
            Difficulty::Medium,
            "Light reactions run in the thylakoid, the Calvin cycle in the stroma.",
        ),
        q(
            "photo-4",
            Topic::Photosynthesis,
            "In which part of the chloroplast do light reactions occur?",
            &["Stroma", "Thylakoid", "Grana", "Outer membrane"],
            1,
            Difficulty::Medium,
            "Thylakoid membranes host the photosystems.",
        ),
        q(
            "photo-5",
            Topic::Photosynthesis,
            "What is the overall balanced equation for photosynthesis?",
            &[
                "C6H12O6 + 6O2 → 6CO2 + 6H2O + energy",
                "6CO2 + 6H2O + light → C6H12O6 + 6O2",
                "C6H12O6 → 2C2H5OH + 2CO2",
                "6O2 + glucose → water + CO2",
            ],
            1,
            Difficulty::Hard,
            "Six CO₂ and six H₂O plus light yield one glucose and six O₂.",
        ),
        q(
            "math-1",
            Topic::Math,
            "Solve: 2x + 5 = 15",
            &["x = 5", "x = 10", "x = 3", "x = 7"],
            0,
            Difficulty::Easy,
            "Subtract 5 from both sides, then divide by 2.",
        ),
        q(
            "math-2",
            Topic::Math,
            "What is the slope of y = 3x + 2?",
            &["3", "2", "0", "-3"],
            0,
            Difficulty::Easy,
            "In y = mx + b, m is the slope.",
        ),
        q(
            "math-3",
            Topic::Math,
            "Solve: 3x - 7 = 14",
            &["x = 7", "x = 2", "x = 21", "x = 3"],
            0,
            Difficulty::Medium,
            "Add 7 to both sides, then divide by 3.",
        ),
        q(
            "math-4",
            Topic::Math,
            "What is the x-intercept of y = 2x - 4?",
            &["2", "-4", "4", "-2"],
            0,
            Difficulty::Medium,
            "Set y = 0 and solve for x.",
        ),
        q(
            "math-5",
            Topic::Math,
            "Solve the system: x + y = 5, 2x - y = 4",
            &["x=3, y=2", "x=1, y=4", "x=2, y=3", "x=4, y=1"],
            0,
            Difficulty::Hard,
            "Add the equations to eliminate y: 3x = 9.",
        ),
    ]
}

/// Topics that actually have bank entries; topics outside this set fall back
/// to photosynthesis at selection time.
pub fn quiz_bank_topics(bank: &[QuizQuestion]) -> std::collections::HashSet<Topic> {
    bank.iter().map(|q| q.topic).collect()
}

/// The five-question VARK-style questionnaire.
pub fn style_questions() -> Vec<StyleQuestion> {
    let a = |text, style| StyleAnswer { text, style };
    vec![
        StyleQuestion {
            id: "1",
            question: "When learning something new, you prefer to:",
            answers: vec![
                a("See diagrams and charts", LearningStyle::Visual),
                a("Listen to explanations", LearningStyle::Auditory),
                a("Read detailed notes", LearningStyle::Reading),
                a("Try it out yourself", LearningStyle::Kinesthetic),
            ],
        },
        StyleQuestion {
            id: "2",
            question: "You remember things best by:",
            answers: vec![
                a("Visual memory (pictures)", LearningStyle::Visual),
                a("Hearing it again", LearningStyle::Auditory),
                a("Writing it down", LearningStyle::Reading),
                a("Doing it repeatedly", LearningStyle::Kinesthetic),
            ],
        },
        StyleQuestion {
            id: "3",
            question: "When giving directions, you tend to:",
            answers: vec![
                a("Draw a map", LearningStyle::Visual),
                a("Explain it verbally", LearningStyle::Auditory),
                a("Write step-by-step instructions", LearningStyle::Reading),
                a("Point and show the way", LearningStyle::Kinesthetic),
            ],
        },
        StyleQuestion {
            id: "4",
            question: "During a presentation, you pay attention to:",
            answers: vec![
                a("Slides and visuals", LearningStyle::Visual),
                a("The speaker's words", LearningStyle::Auditory),
                a("Handouts and notes", LearningStyle::Reading),
                a("Live demonstrations", LearningStyle::Kinesthetic),
            ],
        },
        StyleQuestion {
            id: "5",
            question: "When learning math, you prefer:",
            answers: vec![
                a("Visualizing the problem", LearningStyle::Visual),
                a("Hearing the explanation", LearningStyle::Auditory),
                a("Reading textbooks", LearningStyle::Reading),
                a("Working through problems", LearningStyle::Kinesthetic),
            ],
        },
    ]
}

pub fn style_description(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => {
            "You're a visual learner! You understand best through images, diagrams, charts, and color-coded information. We'll use more visual examples and structure."
        }
        LearningStyle::Auditory => {
            "You're an auditory learner! You learn best by listening and discussing. We'll explain concepts verbally with clear, descriptive language."
        }
        LearningStyle::Reading => {
            "You're a reading/writing learner! You prefer written information and detailed notes. We'll provide comprehensive text explanations."
        }
        LearningStyle::Kinesthetic => {
            "You're a kinesthetic learner! You learn best by doing and practicing. We'll focus on hands-on examples and problem-solving."
        }
        LearningStyle::Unknown => {
            "Let's discover your learning style! Each person learns differently. We'll adapt based on your feedback."
        }
    }
}

pub fn style_tips(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &[
            "Look for responses with diagrams and visual examples",
            "Take screenshots of important concepts",
            "Create mind maps and visual summaries",
        ],
        LearningStyle::Auditory => &[
            "Read explanations aloud to yourself",
            "Discuss concepts with others",
            "Record yourself explaining topics",
        ],
        LearningStyle::Reading => &[
            "Take detailed written notes",
            "Create outlines and summaries",
            "Review written materials frequently",
        ],
        LearningStyle::Kinesthetic => &[
            "Solve practice problems actively",
            "Try real-world applications",
            "Use hands-on experiments and simulations",
        ],
        LearningStyle::Unknown => &[],
    }
}

/// Starter goals seeded on first dashboard read.
pub fn sample_goals() -> Vec<LearningGoal> {
    vec![
        LearningGoal {
            id: "goal-1".into(),
            title: "Master Photosynthesis".into(),
            topic: "Photosynthesis".into(),
            target_mastery: 90,
            progress: 65,
            status: crate::domain::GoalStatus::Active,
        },
        LearningGoal {
            id: "goal-2".into(),
            title: "Excel at Algebra".into(),
            topic: "Algebra".into(),
            target_mastery: 85,
            progress: 70,
            status: crate::domain::GoalStatus::Active,
        },
        LearningGoal {
            id: "goal-3".into(),
            title: "Learn Python Fundamentals".into(),
            topic: "Python".into(),
            target_mastery: 80,
            progress: 50,
            status: crate::domain::GoalStatus::Active,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scripted_topic_has_all_levels() {
        for topic in [Topic::Photosynthesis, Topic::Math, Topic::Python] {
            for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
                assert!(teaching_script(topic, level).is_some(), "{:?}/{:?}", topic, level);
            }
            assert_eq!(validation_questions(topic).len(), 3);
        }
    }

    #[test]
    fn general_topic_has_no_script_or_validations() {
        for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
            assert!(teaching_script(Topic::General, level).is_none());
        }
        assert!(validation_questions(Topic::General).is_empty());
    }

    #[test]
    fn quiz_bank_answers_are_in_range() {
        for q in quiz_bank() {
            assert!(q.correct_answer < q.options.len(), "{}", q.id);
        }
    }

    #[test]
    fn style_questions_cover_all_four_styles() {
        for q in style_questions() {
            let styles: Vec<_> = q.answers.iter().map(|a| a.style).collect();
            assert!(styles.contains(&LearningStyle::Visual));
            assert!(styles.contains(&LearningStyle::Auditory));
            assert!(styles.contains(&LearningStyle::Reading));
            assert!(styles.contains(&LearningStyle::Kinesthetic));
        }
    }
}
