use cucumber::{given, then, when};
use homework_diary_core::{format_english, format_homework_activity, ActivityInput};
use homework_diary_tests::{optional, DiaryWorld};

// ===== Given Steps =====

#[given(expr = "a {string} homework for {string}")]
async fn homework_for(world: &mut DiaryWorld, activity: String, subject: String) {
    world.input = ActivityInput::new(activity, subject);
}

#[given(expr = "the source is {string}")]
async fn source_is(world: &mut DiaryWorld, source: String) {
    world.input.source = optional(&source);
}

#[given(expr = "the chapter is {string}")]
async fn chapter_is(world: &mut DiaryWorld, chapter: String) {
    world.input.chapter = optional(&chapter);
}

#[given(expr = "the page is {string}")]
async fn page_is(world: &mut DiaryWorld, page: String) {
    world.input.page = optional(&page);
}

#[given(expr = "the description is {string}")]
async fn description_is(world: &mut DiaryWorld, description: String) {
    world.input.description = description;
}

// ===== When Steps =====

#[when("the homework is formatted")]
async fn format_homework(world: &mut DiaryWorld) {
    let output = format_homework_activity(&world.input);
    world.record(output);
}

#[when("the homework is formatted in English")]
async fn format_homework_in_english(world: &mut DiaryWorld) {
    let output = format_english(&world.input);
    world.record(output);
}

// ===== Then Steps =====

#[then(expr = "the sentence is {string}")]
async fn sentence_is(world: &mut DiaryWorld, expected: String) {
    assert_eq!(world.output(), expected);
}

#[then(expr = "the sentence starts with {string}")]
async fn sentence_starts_with(world: &mut DiaryWorld, prefix: String) {
    assert!(
        world.output().starts_with(&prefix),
        "{:?} does not start with {:?}",
        world.output(),
        prefix
    );
}

#[then(expr = "the sentence contains {string}")]
async fn sentence_contains(world: &mut DiaryWorld, fragment: String) {
    assert!(
        world.output().contains(&fragment),
        "{:?} does not contain {:?}",
        world.output(),
        fragment
    );
}

#[then("the sentence has no double periods")]
async fn no_double_periods(world: &mut DiaryWorld) {
    assert!(!world.output().contains(".."), "{:?}", world.output());
}

#[then("the sentence contains no Telugu or Devanagari script")]
async fn no_indic_script(world: &mut DiaryWorld) {
    let indic = world.output().chars().any(|c| {
        ('\u{0C00}'..='\u{0C7F}').contains(&c) || ('\u{0900}'..='\u{097F}').contains(&c)
    });
    assert!(!indic, "{:?}", world.output());
}

#[then("formatting it again gives the same sentence")]
async fn formatting_again(world: &mut DiaryWorld) {
    let again = format_homework_activity(&world.input.clone());
    assert_eq!(world.output(), again);
}
