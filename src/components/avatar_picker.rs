use std::rc::Rc;

use yew::prelude::*;

use crate::models::avatar::{badge_color, initials, AvatarCatalog, INITIALS_AVATAR};

#[derive(Properties, PartialEq)]
pub struct AvatarPickerProps {
    pub catalog: Rc<AvatarCatalog>,
    pub selected: String,
    /// Current username, used for the initials badge.
    pub username: String,
    pub on_select: Callback<String>,
}

fn option(value: &str, selected: &str, on_select: &Callback<String>, face: Html) -> Html {
    let is_selected = value == selected;
    let onchange = {
        let on_select = on_select.clone();
        let value = value.to_string();
        Callback::from(move |_: Event| on_select.emit(value.clone()))
    };
    let ring = if is_selected { "border-green-400" } else { "border-transparent" };

    html! {
        <label class={format!("cursor-pointer rounded-full border-2 {}", ring)} title={value.to_string()}>
            <input type="radio" name="avatar" class="hidden"
                value={value.to_string()} checked={is_selected} {onchange} />
            { face }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogFaceProps {
    pub name: String,
    pub url: String,
}

/// Initials badge for `name`.
fn initials_badge(name: &str) -> Html {
    html! {
        <div class="w-10 h-10 rounded-full flex items-center justify-center text-white font-bold text-sm"
            style={format!("background-color: {}", badge_color(name))}>
            { initials(name) }
        </div>
    }
}

/// Catalog image that swaps itself for the name's initials once it fails to load.
#[function_component(CatalogFace)]
pub fn catalog_face(props: &CatalogFaceProps) -> Html {
    let failed = use_state(|| false);
    if *failed {
        return initials_badge(&props.name);
    }
    let onerror = Callback::from(move |_: Event| failed.set(true));

    html! {
        <img class="w-10 h-10 rounded-full" src={props.url.clone()} alt={initials(&props.name)} {onerror} />
    }
}

#[function_component(AvatarPicker)]
pub fn avatar_picker(props: &AvatarPickerProps) -> Html {
    let initials_face = initials_badge(&props.username);

    html! {
        <div class="flex space-x-2" role="radiogroup">
            { option(INITIALS_AVATAR, &props.selected, &props.on_select, initials_face) }
            {
                props.catalog.iter().map(|avatar| {
                    let face = html! {
                        <CatalogFace name={avatar.name.clone()} url={avatar.url.clone()} />
                    };
                    option(&avatar.name, &props.selected, &props.on_select, face)
                }).collect::<Html>()
            }
        </div>
    }
}
