use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::avatar_picker::AvatarPicker;
use crate::config::AppConfig;
use crate::models::user::UserDraft;
use crate::services::registration::{submit, SubmitError};
use crate::services::store::{open_backend, StorageBackend, UserStore};
use crate::services::validation::{message_for, validate, Field, ValidationError};

pub enum Msg {
    SetUsername(String),
    SelectAvatar(String),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct NewUserFormProps {
    /// Emitted once a user has been saved.
    pub on_close: Callback<()>,
}

pub struct NewUserForm {
    config: AppConfig,
    store: UserStore<Rc<dyn StorageBackend>>,
    draft: UserDraft,
    field_errors: Vec<ValidationError>,
    notice: Option<String>,
    submitted: bool,
}

impl NewUserForm {
    fn revalidate(&mut self) {
        if self.submitted {
            self.field_errors = validate(&self.draft, &self.config.avatars)
                .err()
                .unwrap_or_default();
        }
    }

    fn field_message(&self, field: Field) -> Html {
        match message_for(&self.field_errors, field) {
            Some(message) => html! { <p class="text-sm text-red-600">{ message.to_string() }</p> },
            None => html! {},
        }
    }
}

impl Component for NewUserForm {
    type Message = Msg;
    type Properties = NewUserFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<AppConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();
        let store = UserStore::new(open_backend(), config.storage_key.clone());

        Self {
            config,
            store,
            draft: UserDraft::default(),
            field_errors: Vec::new(),
            notice: None,
            submitted: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(username) => {
                self.draft.username = username;
                self.revalidate();
                true
            }
            Msg::SelectAvatar(avatar) => {
                self.draft.avatar = avatar;
                self.revalidate();
                true
            }
            Msg::Submit => {
                self.submitted = true;
                match submit(&self.draft, &self.config.avatars, &self.store) {
                    Ok(_) => {
                        self.draft = UserDraft::default();
                        self.field_errors.clear();
                        self.notice = None;
                        self.submitted = false;
                        ctx.props().on_close.emit(());
                    }
                    Err(SubmitError::Invalid(errors)) => {
                        self.field_errors = errors;
                        self.notice = None;
                    }
                    Err(e) => {
                        self.field_errors.clear();
                        self.notice = Some(e.notice());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: FocusEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetUsername(input.value())
        });
        let on_select = ctx.link().callback(Msg::SelectAvatar);

        html! {
            <form class="space-y-8" {onsubmit}>
                {
                    if let Some(notice) = &self.notice {
                        html! {
                            <div class="p-3 rounded-lg bg-red-100 text-red-700 text-sm" role="alert">
                                { notice.clone() }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="space-y-2">
                    <label class="font-medium" for="username">{"Name"}</label>
                    <input id="username" type="text" placeholder="e.g. Julieta..."
                        class="w-full px-4 py-2 border border-gray-200 rounded-lg"
                        value={self.draft.username.clone()} {oninput} />
                    <p class="text-xs text-gray-500">{"Enter your name."}</p>
                    { self.field_message(Field::Username) }
                </div>
                <div class="space-y-2">
                    <span class="font-medium">{"Avatar"}</span>
                    <AvatarPicker
                        catalog={Rc::clone(&self.config.avatars)}
                        selected={self.draft.avatar.clone()}
                        username={self.draft.username.clone()}
                        {on_select} />
                    { self.field_message(Field::Avatar) }
                </div>
                <button type="submit"
                    class="px-6 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium">
                    {"Add"}
                </button>
            </form>
        }
    }
}
