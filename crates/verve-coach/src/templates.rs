//! The fixed tip template catalog.
//!
//! One template per category, in presentation order. Text fields are Tera
//! templates over the profile variables (`age`, `age_group`, `gender`,
//! `goals`, `primary_goal`); step lists are plain text.

use verve_core::models::tip::TipCategory;

/// Number of tips in a generated plan. One per category.
pub const TIPS_PER_PLAN: usize = 5;

/// A single category's tip template.
pub struct TipTemplate {
    pub category: TipCategory,
    pub title: &'static str,
    pub short_description: &'static str,
    pub detailed_explanation: &'static str,
    pub steps: [&'static str; 5],
}

static NUTRITION: TipTemplate = TipTemplate {
    category: TipCategory::Nutrition,
    title: "Balanced Meal Planning",
    short_description: "Optimize your nutrition for {{ goals }} with a personalized meal approach",
    detailed_explanation: "As a {{ age_group }}, your nutritional needs are unique. Focus on whole \
         foods that support {{ goals }}. Your metabolism and nutrient requirements at age \
         {{ age }} benefit from specific dietary patterns.",
    steps: [
        "Start each day with a protein-rich breakfast (20-30g protein)",
        "Include colorful vegetables in every meal for antioxidants",
        "Choose complex carbohydrates like quinoa, sweet potatoes, and oats",
        "Add healthy fats from avocados, nuts, and olive oil",
        "Stay consistent with meal timing to regulate metabolism",
    ],
};

static EXERCISE: TipTemplate = TipTemplate {
    category: TipCategory::Exercise,
    title: "Personalized Workout Routine",
    short_description: "Age-appropriate exercises designed for {{ gender }}s to achieve \
         {{ primary_goal }}",
    detailed_explanation: "For {{ gender }}s at age {{ age }}, combining strength and cardio is \
         essential. Your fitness routine should align with {{ goals }} while respecting your \
         body's recovery needs.",
    steps: [
        "Begin with 10-minute warm-up: light cardio and dynamic stretches",
        "Perform 20-30 minutes of moderate-intensity exercise 5x per week",
        "Include 2-3 days of strength training targeting major muscle groups",
        "End with 5-10 minutes of cool-down stretching",
        "Track progress weekly and adjust intensity gradually",
    ],
};

static SLEEP: TipTemplate = TipTemplate {
    category: TipCategory::Sleep,
    title: "Sleep Optimization Strategy",
    short_description: "Improve sleep quality to enhance recovery and achieve your wellness goals",
    detailed_explanation: "Quality sleep becomes increasingly important as we age. At {{ age }}, \
         your body needs 7-9 hours of restorative sleep to support {{ goals }}. Sleep directly \
         impacts hormone regulation, recovery, and mental clarity.",
    steps: [
        "Set a consistent bedtime and wake time (even on weekends)",
        "Create a dark, cool environment (65-68°F is optimal)",
        "Avoid screens 1 hour before bed (blue light disrupts melatonin)",
        "Practice a relaxing pre-sleep routine: reading or gentle stretching",
        "Limit caffeine after 2 PM and alcohol before bedtime",
    ],
};

static MENTAL: TipTemplate = TipTemplate {
    category: TipCategory::Mental,
    title: "Mental Wellness Practices",
    short_description: "Build resilience and mental clarity tailored to your life stage",
    detailed_explanation: "Mental health is foundational to achieving {{ goals }}. For \
         {{ age_group }}s, stress management and cognitive health are priorities. Your mental \
         wellness directly influences physical health outcomes.",
    steps: [
        "Practice daily gratitude: write down 3 things you're grateful for",
        "Set aside 15 minutes for meditation or deep breathing",
        "Limit news and social media to reduce information overload",
        "Engage in a hobby or creative activity that brings joy",
        "Connect with friends or loved ones regularly",
    ],
};

static HYDRATION: TipTemplate = TipTemplate {
    category: TipCategory::Hydration,
    title: "Hydration Blueprint",
    short_description: "Optimal water intake strategy for your body and activity level",
    detailed_explanation: "Proper hydration is crucial for {{ goals }}. Your body composition and \
         activity level determine ideal water intake. As a {{ age_group }}, maintaining \
         hydration supports metabolism, skin health, and energy levels.",
    steps: [
        "Calculate your baseline: drink half your body weight in ounces daily",
        "Start your day with 16 oz of water before coffee or breakfast",
        "Keep a reusable water bottle with you at all times",
        "Add 12-16 oz for every 30 minutes of exercise",
        "Monitor urine color: pale yellow indicates good hydration",
    ],
};

/// Generic action steps used when elaborating a tip that has none stored.
pub const FALLBACK_STEPS: [&str; 5] = [
    "Step 1: Begin with awareness of your current habits",
    "Step 2: Set a realistic, measurable goal",
    "Step 3: Create a daily routine around this practice",
    "Step 4: Track your progress and adjust as needed",
    "Step 5: Celebrate small wins along the way",
];

/// Return all tip templates, in presentation order.
pub fn all_templates() -> [&'static TipTemplate; TIPS_PER_PLAN] {
    [&NUTRITION, &EXERCISE, &SLEEP, &MENTAL, &HYDRATION]
}
