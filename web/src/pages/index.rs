//! Landing page

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Terms", "/terms"),
    ("Privacy", "/privacy"),
    ("Jobs", "/jobs"),
    ("Support", "/support"),
];

/// Static landing page body. The search form does not submit anywhere.
pub fn render_index() -> String {
    let footer: String = FOOTER_LINKS
        .iter()
        .map(|(label, href)| format!(r#"            <a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"        <div class="flex flex-col gap-4 h-full mx-auto p-4 max-w-screen-2xl">
            <header class="flex gap-3 items-center">
                <h1 class="bg-white dark:bg-black h-10 w-10 rounded-md"></h1>
                <form onsubmit="event.preventDefault()">
                    <input
                        autocomplete="off"
                        class="bg-gray-200 focus:bg-white bg-opacity-30 focus:bg-opacity-100 duration-100 px-4 py-2 rounded-sm transition-all"
                        placeholder="Search"
                        type="search"
                    >
                </form>

                <div class="flex gap-3 ml-auto">
                    <a href="/login" class="bg-green-500 px-4 py-1.5 rounded-sm">Log In</a>
                    <a href="/register" class="bg-blue-500 px-4 py-1.5 rounded-sm">Sign Up</a>
                </div>
            </header>

            <main class="flex flex-col flex-grow gap-6 items-center justify-center mx-auto w-72 max-w-full">
                <p class="text-center text-white text-xl">
                    Make stuff, look at stuff, talk about stuff, find your people.
                </p>
                <div class="flex flex-col gap-4 w-full">
                    <a href="/register" class="bg-blue-500 px-4 py-2 rounded-sm text-center w-full">Sign Up</a>
                    <a href="/login" class="bg-green-500 px-4 py-2 rounded-sm text-center w-full">Log In</a>
                </div>
            </main>

            <footer class="flex gap-3 dark:text-white text-sm">
{footer}
            </footer>
        </div>"#
    )
}
