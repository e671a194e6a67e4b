//! Page sections. Content is static; only the reveal class is reactive.

use folio_app::render::{self, SectionBody};
use folio_domain::content::{
    Assets, ContactLinks, EducationEntry, ExperienceEntry, Profile, Project, SkillGroup,
};
use folio_domain::section::SectionId;
use leptos::prelude::*;

use super::ProfilePhoto;

/// A reveal-tagged `<section>` wrapping one content table.
#[component]
pub fn Section(
    id: SectionId,
    body: SectionBody<'static>,
    /// Whether the section has scrolled into view.
    #[prop(into)]
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <section id=id.anchor() class=move || render::reveal_class(visible.get())>
            <h2>{id.heading()}</h2>
            {section_body(body)}
        </section>
    }
}

fn section_body(body: SectionBody<'static>) -> AnyView {
    match body {
        SectionBody::About(profile, assets) => about(profile, assets).into_any(),
        SectionBody::Skills(groups) => skills(groups).into_any(),
        SectionBody::Experience(entries) => experience(entries).into_any(),
        SectionBody::Education(entries) => education(entries).into_any(),
        SectionBody::Projects(projects) => projects_grid(projects).into_any(),
        SectionBody::Contact(links, assets) => contact(links, assets).into_any(),
    }
}

fn about(profile: &'static Profile, assets: &'static Assets) -> impl IntoView {
    view! {
        <div class="about">
            <ProfilePhoto
                src=assets.photo.as_str()
                fallback=assets.photo_fallback.as_str()
                alt=profile.name.as_str()
            />
            <div>
                <p class="role">{profile.role.as_str()} " \u{00B7} " {profile.location.as_str()}</p>
                <p>{profile.introduction.as_str()}</p>
                <a class="button" href=assets.resume.as_str() download="">
                    "Download resume"
                </a>
            </div>
        </div>
    }
}

fn skills(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <div class="skill-grid">
            {groups
                .iter()
                .map(|group| {
                    view! {
                        <div class="card">
                            <h3>{group.title.as_str()}</h3>
                            <ul class="tags">
                                {group
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <li>{skill.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn experience(entries: &'static [ExperienceEntry]) -> impl IntoView {
    view! {
        <ol class="timeline">
            {entries
                .iter()
                .map(|entry| {
                    view! {
                        <li class="card">
                            <h3>{entry.title.as_str()}</h3>
                            <p class="meta">
                                {entry.employer.as_str()} " \u{00B7} " {entry.location.as_str()}
                                " \u{00B7} " {entry.period.as_str()}
                            </p>
                            <ul>
                                {entry
                                    .highlights
                                    .iter()
                                    .map(|line| view! { <li>{line.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

fn education(entries: &'static [EducationEntry]) -> impl IntoView {
    entries
        .iter()
        .map(|entry| {
            view! {
                <div class="card">
                    <h3>{entry.degree.as_str()}</h3>
                    <p class="meta">
                        {entry.school.as_str()} " \u{00B7} " {entry.location.as_str()} " \u{00B7} "
                        {entry.period.as_str()}
                    </p>
                </div>
            }
        })
        .collect_view()
}

fn projects_grid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="project-grid">
            {projects
                .iter()
                .map(|project| {
                    view! {
                        <article class="card">
                            <h3>{project.title.as_str()}</h3>
                            <p>{project.problem.as_str()}</p>
                            <p class="stack">{project.stack_line()}</p>
                            <p class="impact">{project.impact.as_str()}</p>
                            <a href=project.repository.as_str() target="_blank" rel="noopener">
                                "Repository"
                            </a>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn contact(links: &'static ContactLinks, assets: &'static Assets) -> impl IntoView {
    view! {
        <p>"Reach me at " <a href=links.email.as_str()>{links.email_address()}</a> "."</p>
        <ul class="links">
            {links
                .entries()
                .into_iter()
                .map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
                .collect_view()}
            <li><a href=assets.resume.as_str() download="">"Resume (PDF)"</a></li>
        </ul>
    }
}
