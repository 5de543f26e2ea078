use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::new_user_form::NewUserForm;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let is_open = use_state(|| false);
    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };
    let dismiss = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <main class="flex min-h-screen flex-col items-center justify-between p-24">
            <div class="rounded-lg border border-gray-200 shadow-sm bg-white">
                <div class="p-6 space-y-1">
                    <h3 class="text-2xl font-semibold">{"Card Title"}</h3>
                    <p class="text-sm text-gray-500">{"Card Description"}</p>
                </div>
                <div class="p-6 pt-0">
                    <p>{"Card Content"}</p>
                </div>
                <div class="flex items-center justify-between p-6 pt-0">
                    <p>{"Card Footer"}</p>
                    <div class="space-x-2">
                        <button onclick={open} class="px-4 py-2 bg-blue-600 text-white rounded-lg">
                            {"Add user"}
                        </button>
                        <Link<Route> to={Route::NewUser} classes="text-sm underline">
                            {"Open as page"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            if *is_open {
                <div class="fixed inset-0 flex items-center justify-center bg-black/50">
                    <div class="w-96 p-6 rounded-lg bg-white shadow-lg space-y-4">
                        <div class="flex items-center justify-between">
                            <h2 class="text-lg font-semibold">{"New user"}</h2>
                            <button onclick={dismiss} title="Close">{"✕"}</button>
                        </div>
                        <NewUserForm on_close={close} />
                    </div>
                </div>
            }
        </main>
    }
}

#[function_component(NewUserPage)]
pub fn new_user_page() -> Html {
    let history = use_history();
    let on_close = Callback::from(move |_: ()| {
        if let Some(history) = &history {
            history.push(Route::Home);
        }
    });

    html! {
        <main class="flex min-h-screen items-center justify-center p-24">
            <div class="w-96 p-6 rounded-lg border border-gray-200 shadow-sm bg-white space-y-4">
                <h2 class="text-lg font-semibold">{"New user"}</h2>
                <NewUserForm {on_close} />
            </div>
        </main>
    }
}
