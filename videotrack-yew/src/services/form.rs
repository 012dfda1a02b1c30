use videotrack_core::{FormControl, FormField};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

/// Lift the form's controls into the snapshot completeness is computed over
pub fn collect_form_fields(form: &HtmlFormElement) -> Vec<FormField> {
    let elements = form.elements();
    let mut fields = Vec::with_capacity(elements.length() as usize);

    for index in 0..elements.length() {
        let Some(element) = elements.item(index) else {
            continue;
        };

        let control = match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => match input.type_().as_str() {
                "radio" => FormControl::Radio {
                    checked: input.checked(),
                },
                "checkbox" => FormControl::Checkbox {
                    checked: input.checked(),
                },
                _ => FormControl::Other,
            },
            None => FormControl::Other,
        };

        let name = element.get_attribute("name").unwrap_or_default();
        fields.push(FormField::new(name, control));
    }

    fields
}
