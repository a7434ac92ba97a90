//! File bodies emitted into generated applications.
//!
//! Every function here is a pure render: validated names and descriptors
//! in, file content out. Files that never vary are `&'static str`
//! constants; parameterized ones are `format!` over raw-string templates.

pub mod host;
pub mod remote;

/// `next.config.js`: wires the sibling `module-federation.config.js`
/// into the client-side webpack build. Identical for hosts and remotes.
pub fn next_config() -> &'static str {
    r#"const { NextFederationPlugin } = require('@module-federation/nextjs-mf');

/** @type {import('next').NextConfig} */
const nextConfig = {
  reactStrictMode: true,
  webpack: (config, options) => {
    const { isServer } = options;
    const federationConfig = require('./module-federation.config.js');

    config.plugins = config.plugins || [];

    if (!isServer) {
      config.plugins.push(new NextFederationPlugin(federationConfig));
    }

    return config;
  },
};

module.exports = nextConfig;
"#
}

/// `.env`: the dev-server port for one application.
pub fn env_port(port: u16) -> String {
    format!("PORT={port}\n")
}
