use clarify_core::{ImageIntentClassifier, Lexicon};

fn classifier() -> ImageIntentClassifier {
    ImageIntentClassifier::new(&Lexicon::default()).expect("default lexicon compiles")
}

#[test]
fn visual_vocabulary_is_detected() {
    let classifier = classifier();
    assert!(classifier.classify("show me the diagram"));
    assert!(classifier.classify("what does the FIGURE on that page mean"));
    assert!(classifier.classify("spiegami l'immagine del circuito"));
    assert!(classifier.classify("describe the photo"));
    assert!(classifier.classify("cosa mostra il grafico"));
}

#[test]
fn plain_questions_are_not_image_intent() {
    let classifier = classifier();
    assert!(!classifier.classify("what is entropy"));
    assert!(!classifier.classify("define the second law"));
    assert!(!classifier.classify(""));
}

#[test]
fn stems_match_inside_words() {
    let classifier = classifier();
    // "figur" is a stem on purpose: it covers figure, figura, figures.
    assert!(classifier.classify("are the figures labeled"));
    assert!(classifier.classify("la figura 3"));
}

#[test]
fn empty_marker_list_never_matches() {
    let lexicon = Lexicon {
        image_markers: Vec::new(),
        ..Lexicon::default()
    };
    let classifier = ImageIntentClassifier::new(&lexicon).expect("lexicon compiles");
    assert!(!classifier.classify("show me the diagram"));
}
