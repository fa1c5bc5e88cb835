//! Built-in Catalog - 内置题库
//!
//! 未配置数据目录时使用的字面量题目。

use super::{PictureQuestion, QuizQuestion, WordQuestion};

const PICTURES: &[(&str, &str)] = &[
    ("https://placehold.co/400x300/A8D9FF/3182CE?text=Cute+Cat", "cat"),
    ("https://placehold.co/400x300/FFC1D8/FF69B4?text=Happy+Dog", "dog"),
    ("https://placehold.co/400x300/E6FFE6/3CB371?text=Red+Apple", "apple"),
    ("https://placehold.co/400x300/ADD8E6/4682B4?text=Big+Tree", "tree"),
    ("https://placehold.co/400x300/FFD700/FFA500?text=Shiny+Car", "car"),
    ("https://placehold.co/400x300/FFFACD/FFB6C1?text=Warm+House", "house"),
    ("https://placehold.co/400x300/B0E0E6/6A5ACD?text=Singing+Bird", "bird"),
    ("https://placehold.co/400x300/FAD0E0/DB7093?text=Yellow+Banana", "banana"),
    ("https://placehold.co/400x300/C1FFFF/40E0D0?text=Blue+Book", "book"),
    ("https://placehold.co/400x300/FFB6C1/FF69B4?text=Fast+Bike", "bike"),
    ("https://placehold.co/400x300/98FB98/32CD32?text=Green+Frog", "frog"),
    ("https://placehold.co/400x300/87CEEB/4169E1?text=Big+Fish", "fish"),
    ("https://placehold.co/400x300/FFEFD5/FF8C00?text=Happy+Sun", "sun"),
    ("https://placehold.co/400x300/E6E6FA/9370DB?text=Purple+Flower", "flower"),
    ("https://placehold.co/400x300/FFFACD/DAA520?text=Yellow+Star", "star"),
];

const WORDS: &[(&str, &str)] = &[
    ("A large, yellow fruit that monkeys love to eat.", "banana"),
    ("It has four legs and barks.", "dog"),
    ("You use this to read stories and learn new things.", "book"),
    ("It flies in the sky and has feathers.", "bird"),
    ("You drive this on roads. It has four wheels.", "car"),
    ("This sweet, red fruit grows on trees.", "apple"),
    ("It has a trunk and green leaves, providing shade.", "tree"),
    ("A friendly animal that meows and loves to nap.", "cat"),
    ("A structure where people live.", "house"),
    ("You pedal this to ride. It has two wheels.", "bike"),
    ("A small, green amphibian that jumps.", "frog"),
    ("It swims in water and has fins.", "fish"),
    ("A bright, warm star that lights up our day.", "sun"),
    (
        "It's beautiful, colorful, and smells nice. Often found in gardens.",
        "flower",
    ),
    ("A shining object in the night sky, often twinkle.", "star"),
];

/// 图片题
pub fn picture_questions() -> Vec<PictureQuestion> {
    PICTURES
        .iter()
        .map(|(src, answer)| PictureQuestion::new(*src, *answer))
        .collect()
}

/// 单词题
pub fn word_questions() -> Vec<WordQuestion> {
    WORDS
        .iter()
        .map(|(hint, answer)| WordQuestion::new(*hint, *answer))
        .collect()
}

/// 选择题
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new("What animal says 'moo'?", ["Dog", "Cat", "Cow", "Duck"], 2),
        QuizQuestion::new(
            "What color is the sky on a sunny day?",
            ["Green", "Blue", "Yellow", "Red"],
            1,
        ),
        QuizQuestion::new("How many legs does a dog have?", ["Two", "Four", "Six", "Eight"], 1),
        QuizQuestion::new(
            "Which fruit is yellow and long?",
            ["Apple", "Orange", "Banana", "Grape"],
            2,
        ),
        QuizQuestion::new("What do you wear on your feet?", ["Gloves", "Hat", "Shoes", "Scarf"], 2),
    ]
}
