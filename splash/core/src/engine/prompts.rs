//! Prompt Pools
//!
//! Fixed task pools, one per catch category. The chest shares the generic
//! pool; the goldfish has a single fixed message rather than a pool.

/// Generic tasks, used for chest catches.
pub const STUFF_PROMPTS: [&str; 10] = [
    "Tell a funny story from your childhood.",
    "Show three things in your room that remind you of summer.",
    "Sing any song as if you were fishing.",
    "Name three things you would take with you to a deserted island.",
    "Use any object nearby and come up with a new purpose for it.",
    "Compliment every friend in the room.",
    "Tell a joke or a pun.",
    "Pretend you are a professional TV presenter and interview your neighbor.",
    "Imitate the sound of a fish jumping out of the water.",
    "Come up with a new name for this game.",
];

/// Fish-themed tasks.
pub const FISH_PROMPTS: [&str; 10] = [
    "Show with your hands what a giant fish would look like.",
    "Do a \"fish dance\".",
    "Say a phrase with a fishing accent.",
    "Imitate a fisherman hauling in a huge catch.",
    "Name three types of fish in 5 seconds.",
    "Make up a joke about fish.",
    "Sing the word \"fish\" 5 times to different tunes.",
    "Invent a new type of fish and describe it.",
    "Show what you would look like if you were a fish.",
    "Take a selfie with a fish face.",
];

/// Swim-ring-themed tasks.
pub const RING_PROMPTS: [&str; 10] = [
    "Jump in place 5 times as if you were in water.",
    "Make a \"drowning doll\" face.",
    "Show how you would float with a circle on the waves.",
    "Name 3 summer drinks in 5 seconds.",
    "Show how you would look on the beach.",
    "Come up with a new shape for a circle (pizza? cat?).",
    "Imitate the sound of waves.",
    "Say any word adding \"-slap\" at the end.",
    "Stand up and do breaststroke moves.",
    "Imagine you are a circle and let someone \"put\" you on.",
];

/// The one fixed message for the goldfish. Never drawn from a pool.
pub const GOLDFISH_PROMPT: &str = "Make a wish for all the players!";
