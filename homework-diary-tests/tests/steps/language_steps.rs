use cucumber::{then, when};
use homework_diary_core::{detect_language, is_maths_subject, Language, LanguagePack};
use homework_diary_tests::DiaryWorld;

#[when(expr = "the language of {string} is detected")]
async fn detect(world: &mut DiaryWorld, subject: String) {
    world.language = Some(detect_language(&subject));
}

#[then(expr = "the language is {word}")]
async fn language_is(world: &mut DiaryWorld, expected: String) {
    let language = world.language.expect("No language detected yet");
    assert!(
        language.to_string().eq_ignore_ascii_case(&expected),
        "{} != {}",
        language,
        expected
    );
}

#[then(expr = "the {word} lesson label for {string} is {string}")]
async fn lesson_label(_world: &mut DiaryWorld, language: String, subject: String, label: String) {
    let pack = [Language::English, Language::Telugu, Language::Hindi]
        .into_iter()
        .map(LanguagePack::for_language)
        .find(|p| p.language.to_string().eq_ignore_ascii_case(&language))
        .unwrap_or_else(|| panic!("Unknown language '{}'", language));

    assert_eq!(pack.lesson_label(is_maths_subject(&subject)), label);
}
