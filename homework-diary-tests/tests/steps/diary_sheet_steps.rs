use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use homework_diary_core::{DiarySheet, HomeworkEntry};
use homework_diary_tests::{optional, DiaryWorld};

// ===== Given Steps =====

#[given(expr = "the following homework for class {string}:")]
async fn homework_table(world: &mut DiaryWorld, class: String, step: &Step) {
    let table = step.table.as_ref().expect("Homework table missing");

    // First row is the header: subject | activity | source | chapter | page | description
    for row in table.rows.iter().skip(1) {
        let entry = HomeworkEntry::new(class.clone(), world.date, &row[0], &row[1], &row[5])
            .with_source(optional(&row[2]));
        let entry = match optional(&row[3]) {
            Some(chapter) => entry.with_chapter(chapter),
            None => entry,
        };
        let entry = match optional(&row[4]) {
            Some(page) => entry.with_page(page),
            None => entry,
        };
        world.entries.push(entry);
    }
}

#[given("the renderer has no Telugu font")]
async fn no_telugu_font(world: &mut DiaryWorld) {
    world.support.telugu = false;
}

#[given("the renderer has no Devanagari font")]
async fn no_devanagari_font(world: &mut DiaryWorld) {
    world.support.devanagari = false;
}

// ===== When Steps =====

#[when(expr = "the diary sheet for class {string} is built with subjects {string}")]
async fn build_sheet(world: &mut DiaryWorld, class: String, subjects: String) {
    let subjects: Vec<&str> = subjects.split(',').map(str::trim).collect();
    world.sheet = Some(DiarySheet::build(
        &class,
        world.date,
        &subjects,
        &world.entries,
        world.support,
    ));
}

// ===== Then Steps =====

#[then(expr = "the sheet has {int} rows")]
async fn row_count(world: &mut DiaryWorld, count: usize) {
    assert_eq!(world.sheet().len(), count);
}

#[then(expr = "row {int} is {string}")]
async fn row_subject(world: &mut DiaryWorld, row: usize, subject: String) {
    assert_eq!(world.sheet().rows[row - 1].subject, subject);
}

#[then(expr = "row {int} is emphasized")]
async fn row_emphasized(world: &mut DiaryWorld, row: usize) {
    assert!(world.sheet().rows[row - 1].emphasized);
}

#[then(expr = "row {int} is not emphasized")]
async fn row_not_emphasized(world: &mut DiaryWorld, row: usize) {
    assert!(!world.sheet().rows[row - 1].emphasized);
}

#[then(expr = "row {int} is in {word}")]
async fn row_language(world: &mut DiaryWorld, row: usize, language: String) {
    let actual = world.sheet().rows[row - 1].language.to_string();
    assert!(actual.eq_ignore_ascii_case(&language), "{} != {}", actual, language);
}

#[then(expr = "row {int} reads {string}")]
async fn row_text(world: &mut DiaryWorld, row: usize, text: String) {
    assert_eq!(world.sheet().rows[row - 1].text, text);
}
