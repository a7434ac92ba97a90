//! Artifacts only a remote application carries: the exposes map and the
//! two components it serves to hosts.

/// `module-federation.config.js` for a remote: exposes exactly the two
/// component entry points and carries no remotes map.
pub fn federation_config(name: &str) -> String {
    format!(
        r#"const {{ NextFederationPlugin }} = require('@module-federation/nextjs-mf');

module.exports = {{
  name: '{name}',
  filename: 'remoteEntry.js',
  exposes: {{
    './counter': './src/components/exposed/Counter.tsx',
    './card': './src/components/exposed/Card.tsx',
  }},
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

/// `src/components/exposed/Counter.tsx`, titled with the remote's name.
pub fn counter(name: &str) -> String {
    format!(
        r#"'use client';

import {{ useState }} from 'react';

export default function Counter() {{
  const [count, setCount] = useState(0);

  return (
    <div className="p-4 border rounded-lg shadow-md">
      <h2 className="text-xl font-bold">Counter from {name}</h2>
      <p className="mt-2">Count: {{count}}</p>
      <button
        className="mt-2 px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600"
        onClick={{() => setCount(count + 1)}}
      >
        Increment
      </button>
    </div>
  );
}}
"#
    )
}

/// `src/components/exposed/Card.tsx`, defaults naming the remote.
pub fn card(name: &str) -> String {
    format!(
        r#"'use client';

interface CardProps {{
  title?: string;
  description?: string;
}}

export default function Card({{
  title = "Card from {name}",
  description = "This is a card component exposed from {name}"
}}: CardProps) {{
  return (
    <div className="p-6 max-w-sm bg-white rounded-xl shadow-md flex flex-col space-y-4">
      <h3 className="text-xl font-medium text-black">{{title}}</h3>
      <p className="text-gray-500">{{description}}</p>
      <button className="px-4 py-2 text-sm text-white bg-blue-500 rounded-md hover:bg-blue-600">
        Learn More
      </button>
    </div>
  );
}}
"#
    )
}
