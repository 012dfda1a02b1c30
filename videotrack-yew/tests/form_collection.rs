#![cfg(target_arch = "wasm32")]

use videotrack_core::{is_form_complete, FormControl};
use videotrack_yew::services::collect_form_fields;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlFormElement;

wasm_bindgen_test_configure!(run_in_browser);

fn form_from_html(inner: &str) -> HtmlFormElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let form = document
        .create_element("form")
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    form.set_inner_html(inner);
    document.body().unwrap().append_child(&form).unwrap();
    form
}

#[wasm_bindgen_test]
fn collects_checkable_controls() {
    let form = form_from_html(
        r#"
        <input type="radio" name="q1" value="a">
        <input type="radio" name="q1" value="b" checked>
        <input type="checkbox" name="q2" value="x">
        <input type="text" name="comment">
        "#,
    );

    let fields = collect_form_fields(&form);

    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0].name, "q1");
    assert_eq!(fields[0].control, FormControl::Radio { checked: false });
    assert_eq!(fields[1].control, FormControl::Radio { checked: true });
    assert_eq!(fields[2].control, FormControl::Checkbox { checked: false });
    assert_eq!(fields[3].control, FormControl::Other);
}

#[wasm_bindgen_test]
fn unchecked_group_blocks_completion() {
    let form = form_from_html(
        r#"
        <input type="checkbox" name="q1" value="a">
        <input type="checkbox" name="q1" value="b">
        "#,
    );

    assert!(!is_form_complete(&collect_form_fields(&form)));
}

#[wasm_bindgen_test]
fn answered_groups_complete_the_form() {
    let form = form_from_html(
        r#"
        <input type="radio" name="q1" value="a" checked>
        <input type="radio" name="q1" value="b">
        <input type="checkbox" name="q2" value="x" checked>
        "#,
    );

    assert!(is_form_complete(&collect_form_fields(&form)));
}
