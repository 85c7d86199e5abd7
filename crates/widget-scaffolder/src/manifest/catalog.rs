//! Pinned versions for every package an installer can add
//!
//! Pinning here avoids a registry lookup per package at scaffold time.

/// npm packages known to the installers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Package {
    // Tailwind CSS
    TailwindCss,
    PostCss,
    Autoprefixer,
    Prettier,
    PrettierPluginTailwindCss,

    // ESLint
    Eslint,
    TypescriptEslintParser,
    TypescriptEslintPlugin,
    EslintPluginReactHooks,
    EslintPluginReactRefresh,
    EslintPluginVue,
    VueEslintConfigTypescript,
}

impl Package {
    pub fn name(&self) -> &'static str {
        match self {
            Package::TailwindCss => "tailwindcss",
            Package::PostCss => "postcss",
            Package::Autoprefixer => "autoprefixer",
            Package::Prettier => "prettier",
            Package::PrettierPluginTailwindCss => "prettier-plugin-tailwindcss",
            Package::Eslint => "eslint",
            Package::TypescriptEslintParser => "@typescript-eslint/parser",
            Package::TypescriptEslintPlugin => "@typescript-eslint/eslint-plugin",
            Package::EslintPluginReactHooks => "eslint-plugin-react-hooks",
            Package::EslintPluginReactRefresh => "eslint-plugin-react-refresh",
            Package::EslintPluginVue => "eslint-plugin-vue",
            Package::VueEslintConfigTypescript => "@vue/eslint-config-typescript",
        }
    }

    pub fn version(&self) -> &'static str {
        match self {
            Package::TailwindCss => "^3.4.3",
            Package::PostCss => "^8.4.39",
            Package::Autoprefixer => "^10.4.19",
            Package::Prettier => "^3.3.2",
            Package::PrettierPluginTailwindCss => "^0.6.5",
            Package::Eslint => "^8.57.0",
            Package::TypescriptEslintParser => "^7.13.1",
            Package::TypescriptEslintPlugin => "^7.13.1",
            Package::EslintPluginReactHooks => "^4.6.2",
            Package::EslintPluginReactRefresh => "^0.4.7",
            Package::EslintPluginVue => "^9.26.0",
            Package::VueEslintConfigTypescript => "^13.0.0",
        }
    }
}
