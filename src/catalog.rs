use crate::vfs::{extension_of, FileKind, FileRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cv,
    Documents,
    Projects,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cv, Category::Documents, Category::Projects];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cv => "cv",
            Category::Documents => "documents",
            Category::Projects => "projects",
        }
    }

    /// Matches a directory name exactly; callers lowercase user input first.
    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

/// Compiled-in, read-only files.
pub struct Catalog {
    entries: Vec<(Category, Vec<FileRecord>)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            entries: vec![
                (
                    Category::Cv,
                    vec![
                        FileRecord::asset(
                            "Paulo_Oliveira_CV_2025.pdf",
                            245760,
                            "/cv/Paulo_Oliveira_CV_2024.pdf",
                        ),
                        FileRecord::asset(
                            "Paulo_Oliveira_CV_2025.docx",
                            1048576,
                            "/cv/Paulo_Oliveira_CV_2025.docx",
                        ),
                    ],
                ),
                (
                    Category::Documents,
                    vec![
                        document(
                            "README.md",
                            2048,
                            "# Paulo's documents\n\nThis is an example markdown file.",
                        ),
                        document(
                            "notas.txt",
                            512,
                            "A few important notes:\n\n- Study React Query\n- Write unit tests\n- Review the project architecture",
                        ),
                    ],
                ),
                (Category::Projects, Vec::new()),
            ],
        }
    }

    pub fn files(&self, category: Category) -> &[FileRecord] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, files)| files.as_slice())
            .unwrap_or(&[])
    }

    /// First match across all categories.
    pub fn find(&self, name: &str) -> Option<&FileRecord> {
        self.entries
            .iter()
            .flat_map(|(_, files)| files.iter())
            .find(|f| f.name == name)
    }

    pub fn find_in(&self, category: Category, name: &str) -> Option<&FileRecord> {
        self.files(category).iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, files)| files.iter().map(|f| f.name.as_str()))
    }
}

fn document(name: &str, size: usize, content: &str) -> FileRecord {
    FileRecord {
        name: name.into(),
        kind: FileKind::File,
        size,
        extension: extension_of(name),
        content: Some(content.into()),
        download_url: None,
    }
}

pub struct Project {
    pub key: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub links: &'static [(&'static str, &'static str)],
}

pub const PROJECTS: &[Project] = &[
    Project {
        key: "routina",
        name: "Routina",
        tagline: "A PWA that keeps procrastination away, with a touch of gaming.",
        description: "Routina is my attempt at making task management less boring. It leans on gamification: you earn XP, level up and unlock achievements just for getting your things done.",
        stack: &["Next.js, TypeScript, Tailwind CSS", "Node.js, Express, PostgreSQL"],
        links: &[("GitHub", "https://github.com/esc4n0rx/Routina")],
    },
    Project {
        key: "mobview",
        name: "MobView",
        tagline: "Tired of opening DevTools? A visual emulator to make life easier.",
        description: "I built MobView to speed up testing layouts on different screens. It is a simple visual emulator made with Node.js and Electron for a quick look without the hassle.",
        stack: &["Node.js and Electron"],
        links: &[("GitHub", "https://github.com/esc4n0rx/mobview")],
    },
    Project {
        key: "wally",
        name: "Wally",
        tagline: "PWA for downloading high-res wallpapers without annoying ads.",
        description: "A very simple PWA for people who like quality wallpapers and no ads. The idea was to be fast and to the point, using the Wallhaven API.",
        stack: &["Next.js, Redux, TypeScript", "Wallhaven API"],
        links: &[
            ("Demo", "https://wally-jade.vercel.app/"),
            ("GitHub", "https://github.com/esc4n0rx/wally-pwa"),
        ],
    },
    Project {
        key: "cobolify",
        name: "COBOLify",
        tagline: "Yes, I touched COBOL. A CLI that uses AI to generate legacy code.",
        description: "A CLI that uses AI (OpenAI, Claude, etc.) to translate natural language into COBOL. A bridge between the new and the legacy.",
        stack: &["Python", "AI APIs: OpenAI, Anthropic Claude, Groq, Arcee"],
        links: &[("GitHub", "https://github.com/esc4n0rx/cobolify")],
    },
];

/// Case-insensitive project lookup.
pub fn find_project(key: &str) -> Option<&'static Project> {
    let key = key.to_lowercase();
    PROJECTS.iter().find(|p| p.key == key)
}

pub fn format_file_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".into();
    }
    let mut i = 0;
    let mut scale = 1u64;
    while i < UNITS.len() - 1 && bytes as u64 >= scale * 1024 {
        scale *= 1024;
        i += 1;
    }
    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[i])
}

pub fn file_icon(extension: &str) -> &'static str {
    match extension {
        "pdf" => "📄",
        "txt" => "📝",
        "md" => "📋",
        "js" => "⚡",
        "ts" => "🔷",
        "json" => "⚙️",
        "css" => "🎨",
        "html" => "🌐",
        _ => "📄",
    }
}
