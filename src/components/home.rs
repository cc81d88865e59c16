//! Landing page: project list and project creation.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::{AppRoute, Project, ProjectType};
use crate::utils::format::truncate;

stylance::import_crate_style!(css, "src/components/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Bumped after create/delete so the listing refetches.
    let refresh = RwSignal::new(0u32);
    let action_error = RwSignal::new(None::<String>);

    let projects = LocalResource::new(move || {
        refresh.track();
        async move { ctx.project_list().await }
    });

    view! {
        <div class=css::page>
            <header class=css::header>
                <span class=css::title>
                    <Icon icon=ic::HOME />
                    {APP_NAME}
                </span>
            </header>

            <CreateProjectForm on_created=Callback::new(move |_| {
                refresh.update(|n| *n += 1);
            }) />

            {move || action_error.get().map(|err| view! {
                <p class=css::error>{err}</p>
            })}

            <Suspense fallback=move || view! { <p class=css::loading>"Loading projects..."</p> }>
                {move || projects.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! {
                        <p class=css::empty>"No projects yet. Create one above."</p>
                    }.into_any(),
                    Ok(list) => view! {
                        <div class=css::projects>
                            <For
                                each=move || list.clone()
                                key=|project| project.name.clone()
                                children=move |project| view! {
                                    <ProjectCard
                                        project=project
                                        on_error=Callback::new(move |msg| action_error.set(Some(msg)))
                                        on_deleted=Callback::new(move |_| refresh.update(|n| *n += 1))
                                    />
                                }
                            />
                        </div>
                    }.into_any(),
                    Err(err) => view! {
                        <p class=css::error>{format!("Failed to load projects: {}", err)}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    on_error: Callback<String>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = project.name.clone();
    let description = project
        .description
        .clone()
        .map(|d| truncate(&d, 120))
        .unwrap_or_default();

    let open_name = name.clone();
    let open = move |_: leptos::ev::MouseEvent| {
        AppRoute::ProjectEdit {
            name: open_name.clone(),
        }
        .push();
    };

    let download_name = name.clone();
    let download = move |_: leptos::ev::MouseEvent| {
        let name = download_name.clone();
        spawn_local(async move {
            if let Err(err) = ctx.download_project(&name).await {
                on_error.run(format!("Download failed: {}", err));
            }
        });
    };

    let delete_name = name.clone();
    let delete = move |_: leptos::ev::MouseEvent| {
        let name = delete_name.clone();
        spawn_local(async move {
            match ctx.delete_project(&name).await {
                Ok(_) => on_deleted.run(()),
                Err(err) => on_error.run(format!("Delete failed: {}", err)),
            }
        });
    };

    view! {
        <div class=css::card>
            <button class=css::cardMain on:click=open>
                <span class=css::cardTitle>{name.clone()}</span>
                <span class=css::cardMeta>
                    {project.project_type.label()}
                    " · "
                    {project.version.clone()}
                    " · "
                    {project.namespace.clone()}
                </span>
                <span class=css::cardDesc>{description}</span>
            </button>
            <div class=css::actions>
                <button class=css::actionBtn title="Download" on:click=download>
                    <Icon icon=ic::DOWNLOAD />
                </button>
                <button class=css::actionBtn title="Delete" on:click=delete>
                    <Icon icon=ic::TRASH />
                </button>
            </div>
        </div>
    }
}

#[component]
fn CreateProjectForm(on_created: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = RwSignal::new(String::new());
    let namespace = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let version = RwSignal::new(String::new());
    let project_type = RwSignal::new(ProjectType::DataPack);
    let form_error = RwSignal::new(None::<String>);

    let versions = LocalResource::new(move || async move { ctx.version_list().await });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        let project = Project {
            icon: None,
            name: name.get().trim().to_string(),
            description: Some(description.get()).filter(|d| !d.trim().is_empty()),
            version: version.get(),
            namespace: namespace.get().trim().to_string(),
            project_type: project_type.get(),
        };
        if project.name.is_empty() || project.namespace.is_empty() || project.version.is_empty() {
            form_error.set(Some("Name, namespace and version are required".to_string()));
            return;
        }

        spawn_local(async move {
            match ctx.create_project(&project).await {
                Ok(_) => {
                    name.set(String::new());
                    namespace.set(String::new());
                    description.set(String::new());
                    on_created.run(());
                }
                Err(err) => form_error.set(Some(format!("Create failed: {}", err))),
            }
        });
    };

    view! {
        <form class=css::form on:submit=submit>
            <div class=css::formRow>
                <input
                    class=css::field
                    placeholder="Project name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class=css::field
                    placeholder="Namespace"
                    prop:value=move || namespace.get()
                    on:input=move |ev| namespace.set(event_target_value(&ev))
                />
                <select
                    class=css::field
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(ty) = ProjectType::ALL.iter().find(|t| t.as_str() == value) {
                            project_type.set(*ty);
                        }
                    }
                >
                    {ProjectType::ALL
                        .into_iter()
                        .map(|ty| view! {
                            <option value=ty.as_str() selected=move || project_type.get() == ty>
                                {ty.label()}
                            </option>
                        })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class=css::field
                    on:change=move |ev| version.set(event_target_value(&ev))
                >
                    <option value="" disabled=true selected=move || version.get().is_empty()>
                        "Game version"
                    </option>
                    {move || versions.get().map(|result| match result {
                        Ok(list) => list
                            .into_iter()
                            .map(|v| {
                                let value = v.clone();
                                let label = v.clone();
                                view! {
                                    <option value=value selected=move || version.get() == v>
                                        {label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any(),
                        Err(err) => view! {
                            <option disabled=true>{format!("versions unavailable: {}", err)}</option>
                        }.into_any(),
                    })}
                </select>
            </div>
            <div class=css::formRow>
                <input
                    class=css::fieldWide
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class=css::submit type="submit">
                    <Icon icon=ic::PLUS />
                    "Create"
                </button>
            </div>
            {move || form_error.get().map(|err| view! {
                <p class=css::error>{err}</p>
            })}
        </form>
    }
}
