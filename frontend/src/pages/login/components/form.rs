use crate::pages::login::{components::messages::LoginNoticeBanner, view_model::LoginNotice};
use leptos::{ev::SubmitEvent, *};

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Ingresando..."
    } else {
        "Ingresar"
    }
}

#[component]
pub fn LoginForm(
    correo: RwSignal<String>,
    contrasena: RwSignal<String>,
    #[prop(into)] notice: Signal<Option<LoginNotice>>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="flex flex-col items-center">
                    <img src="/logo.png" alt="Finz Logo" class="h-12 w-12"/>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Iniciar sesión"</h2>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="correo" class="sr-only">"Correo electrónico"</label>
                            <input
                                id="correo"
                                name="correo"
                                type="email"
                                autocomplete="email"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-t-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Correo electrónico"
                                prop:value=move || correo.get()
                                prop:disabled=move || submitting.get()
                                on:input=move |ev| correo.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="contrasena" class="sr-only">"Contraseña"</label>
                            <input
                                id="contrasena"
                                name="contrasena"
                                type="password"
                                autocomplete="current-password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-b-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Contraseña"
                                prop:value=move || contrasena.get()
                                prop:disabled=move || submitting.get()
                                on:input=move |ev| contrasena.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <LoginNoticeBanner notice=notice/>

                    <div>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || submit_label(submitting.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
