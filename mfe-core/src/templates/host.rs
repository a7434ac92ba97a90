//! Artifacts only a host application carries: the remotes map, the
//! dynamic-import page, ambient type declarations, and the federation
//! bootstrap scripts.

use crate::allocate::RemoteDescriptor;

/// `module-federation.config.js` for a host: maps every remote onto its
/// federation entry URL. With no remotes the map is empty but present,
/// so the config stays loadable either way.
pub fn federation_config(name: &str, remotes: &[RemoteDescriptor]) -> String {
    let entries = remotes
        .iter()
        .map(|remote| format!("  {}: '{}@{}',", remote.name, remote.name, remote.entry_url()))
        .collect::<Vec<_>>()
        .join("\n");
    let remotes_map = if entries.is_empty() {
        "const remotes = {};".to_string()
    } else {
        format!("const remotes = {{\n{entries}\n}};")
    };

    format!(
        r#"const {{ NextFederationPlugin }} = require('@module-federation/nextjs-mf');

{remotes_map}

module.exports = {{
  name: '{name}',
  filename: 'remoteEntry.js',
  remotes,
  shared: {{
    react: {{
      singleton: true,
      requiredVersion: false,
    }},
    'react-dom': {{
      singleton: true,
      requiredVersion: false,
    }},
  }},
}};
"#
    )
}

/// `src/app/page.tsx` for a host: a lazily-loaded Counter/Card pair per
/// remote, each behind its own `Suspense` boundary so remotes resolve
/// independently and a slow one cannot block the rest of the page.
pub fn page(name: &str, remotes: &[RemoteDescriptor]) -> String {
    let imports = remotes
        .iter()
        .map(dynamic_imports)
        .collect::<Vec<_>>()
        .join("\n\n");
    let imports_block = if imports.is_empty() {
        String::new()
    } else {
        format!("\n{imports}\n")
    };
    let sections = remotes
        .iter()
        .map(remote_section)
        .collect::<Vec<_>>()
        .join("\n");
    let sections_block = if sections.is_empty() {
        String::new()
    } else {
        format!("\n{sections}")
    };

    format!(
        r#"'use client';

import dynamic from 'next/dynamic';
import {{ Suspense }} from 'react';
{imports_block}
export default function Home() {{
  return (
    <main className="flex min-h-screen flex-col items-center justify-between p-24">
      <h1 className="text-4xl font-bold mb-8">Host App: {name}</h1>

      <div className="grid grid-cols-1 md:grid-cols-2 gap-8">{sections_block}
      </div>
    </main>
  );
}}
"#
    )
}

fn dynamic_imports(remote: &RemoteDescriptor) -> String {
    format!(
        r#"const {base}Counter = dynamic(
  async () => {{
    // @ts-ignore
    const container = await import('{name}/counter');
    return container.default;
  }},
  {{
    ssr: false,
    loading: () => <div>Loading {name} counter...</div>
  }}
);

const {base}Card = dynamic(
  async () => {{
    // @ts-ignore
    const container = await import('{name}/card');
    return container.default;
  }},
  {{
    ssr: false,
    loading: () => <div>Loading {name} card...</div>
  }}
);"#,
        base = remote.identifier_base,
        name = remote.name,
    )
}

fn remote_section(remote: &RemoteDescriptor) -> String {
    format!(
        r#"        <div key="{name}" className="space-y-8">
          <h2 className="text-2xl font-semibold">Components from {name}</h2>
          <Suspense fallback={{<div>Loading {name} counter...</div>}}>
            <{base}Counter />
          </Suspense>
          <Suspense fallback={{<div>Loading {name} card...</div>}}>
            <{base}Card />
          </Suspense>
        </div>"#,
        base = remote.identifier_base,
        name = remote.name,
    )
}

/// `src/types/remote-modules.d.ts`: ambient declarations so the page's
/// `<remote>/counter` imports typecheck. Empty when there are no remotes.
pub fn remote_type_decls(remotes: &[RemoteDescriptor]) -> String {
    remotes
        .iter()
        .map(|remote| {
            format!(
                r#"declare module '{name}/counter' {{
  const Counter: React.ComponentType;
  export default Counter;
}}
"#,
                name = remote.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `.env.local`: one public URL variable per remote, uppercased name.
pub fn env_local(remotes: &[RemoteDescriptor]) -> String {
    let lines: Vec<String> = remotes
        .iter()
        .map(|remote| {
            format!(
                "NEXT_PUBLIC_{}_URL={}",
                remote.name.to_uppercase(),
                remote.base_url()
            )
        })
        .collect();
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// `src/bootstrap.js`: injects every remote's entry script at startup.
/// Injection is sequential and unguarded, so the first failure aborts
/// the remaining remotes.
pub fn bootstrap(remotes: &[RemoteDescriptor]) -> String {
    let entries = remotes
        .iter()
        .map(|remote| format!("  '{}': '{}',", remote.name, remote.entry_url()))
        .collect::<Vec<_>>()
        .join("\n");
    let remotes_map = if entries.is_empty() {
        "window.initialRemotes = {};".to_string()
    } else {
        format!("window.initialRemotes = {{\n{entries}\n}};")
    };

    format!(
        r#"import {{ injectScript }} from '@module-federation/nextjs-mf/utils';

// This is needed for module federation
{remotes_map}

export async function initializeApp() {{
  for (const [remote, url] of Object.entries(window.initialRemotes)) {{
    await injectScript({{
      global: remote,
      url: url,
    }});
  }}
}}

initializeApp();
"#
    )
}

/// `src/app/init-remote.js`: federation init glue for the host runtime.
pub fn init_remote() -> &'static str {
    r#"import { initFederation } from '@module-federation/nextjs-mf/utils';

export const initRemote = () => {
  return initFederation({
    remoteType: 'host',
    isServer: typeof window === 'undefined',
  });
};
"#
}

/// `src/app/layout.tsx`: root layout with Geist font configuration.
pub fn layout() -> &'static str {
    r#"import { GeistSans } from 'geist/font/sans';
import { GeistMono } from 'geist/font/mono';
import './globals.css';

export default function RootLayout({
  children,
}: {
  children: React.ReactNode;
}) {
  return (
    <html lang="en" className={`${GeistSans.variable} ${GeistMono.variable}`}>
      <body className={GeistSans.className}>
        {children}
      </body>
    </html>
  );
}
"#
}

/// `next-env.d.ts`: fixed Next.js reference declarations.
pub fn next_env() -> &'static str {
    r#"/// <reference types="next" />
/// <reference types="next/image-types/global" />

// NOTE: This file should not be edited
// see https://nextjs.org/docs/basic-features/typescript for more information.
"#
}
