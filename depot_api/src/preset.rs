use std::io::Cursor;
use std::io::Write;

use anyhow::Result;
use zip::write::SimpleFileOptions;

/// One file of the starter theme, path relative to the archive root.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetFile {
    pub path: &'static str,
    pub content: &'static str,
}

pub const PRESET_ARCHIVE_NAME: &'static str = "theme-preset.zip";

/// The fixed starter theme. Pure data, no I/O, no failure path.
pub fn preset_files() -> Vec<PresetFile> {
    vec![
        PresetFile {
            path: "components/Header.tsx",
            content: HEADER_TSX,
        },
        PresetFile {
            path: "components/Footer.tsx",
            content: FOOTER_TSX,
        },
        PresetFile {
            path: "components/ProductGrid.tsx",
            content: PRODUCT_GRID_TSX,
        },
        PresetFile {
            path: "styles/globals.css",
            content: GLOBALS_CSS,
        },
        PresetFile {
            path: "README.md",
            content: README_MD,
        },
    ]
}

/// Package the starter theme into an in-memory ZIP archive.
pub fn build_preset_zip() -> Result<Vec<u8>> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for file in preset_files() {
        zip.start_file(file.path, options)?;
        zip.write_all(file.content.as_bytes())?;
    }
    Ok(zip.finish()?.into_inner())
}

const HEADER_TSX: &'static str = r#"import React from 'react';

interface HeaderProps {
  logo?: string;
  navigation?: Array<{ label: string; href: string }>;
  showSearch?: boolean;
}

const Header: React.FC<HeaderProps> = ({
  logo = '/logo.svg',
  navigation = [],
  showSearch = true
}) => {
  return (
    <header className="bg-white shadow-md sticky top-0 z-50">
      <div className="container mx-auto px-4 py-4">
        <div className="flex items-center justify-between">
          <div className="flex items-center">
            <img src={logo} alt="Logo" className="h-8 w-auto" />
          </div>

          <nav className="hidden md:flex space-x-8">
            {navigation.map((item, index) => (
              <a
                key={index}
                href={item.href}
                className="text-gray-700 hover:text-blue-600 transition-colors font-medium"
              >
                {item.label}
              </a>
            ))}
          </nav>

          {showSearch && (
            <div className="flex items-center space-x-4">
              <input
                type="text"
                placeholder="Search products..."
                className="px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 w-64"
              />
              <button className="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700">
                Search
              </button>
            </div>
          )}
        </div>
      </div>
    </header>
  );
};

export default Header;"#;

const FOOTER_TSX: &'static str = r#"import React from 'react';

interface FooterProps {
  companyName?: string;
  year?: number;
}

const Footer: React.FC<FooterProps> = ({
  companyName = 'Your Store',
  year = new Date().getFullYear()
}) => {
  return (
    <footer className="bg-gray-900 text-white">
      <div className="container mx-auto px-4 py-12">
        <div className="text-center">
          <h3 className="text-lg font-semibold mb-4">{companyName}</h3>
          <p className="text-gray-400 mb-8">
            Your trusted online store for quality products.
          </p>
          <div className="border-t border-gray-800 pt-8">
            <p className="text-gray-400">
              © {year} {companyName}. All rights reserved.
            </p>
          </div>
        </div>
      </div>
    </footer>
  );
};

export default Footer;"#;

const PRODUCT_GRID_TSX: &'static str = r#"import React from 'react';

interface Product {
  id: string;
  name: string;
  price: number;
  image: string;
}

interface ProductGridProps {
  products: Product[];
  onProductClick?: (product: Product) => void;
}

const ProductGrid: React.FC<ProductGridProps> = ({ products, onProductClick }) => {
  return (
    <div className="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
      {products.map((product) => (
        <div
          key={product.id}
          className="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow cursor-pointer"
          onClick={() => onProductClick?.(product)}
        >
          <div className="aspect-square bg-gray-100">
            <img
              src={product.image}
              alt={product.name}
              className="w-full h-full object-cover"
            />
          </div>
          <div className="p-4">
            <h3 className="text-lg font-semibold text-gray-900 mb-2">
              {product.name}
            </h3>
            <p className="text-xl font-bold text-blue-600">
              ${product.price.toFixed(2)}
            </p>
          </div>
        </div>
      ))}
    </div>
  );
};

export default ProductGrid;"#;

const GLOBALS_CSS: &'static str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

@layer components {
  .btn-primary {
    @apply bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors;
  }

  .card {
    @apply bg-white rounded-lg shadow-md p-6;
  }
}

.animate-fade-in {
  animation: fadeIn 0.5s ease-in-out;
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}"#;

const README_MD: &'static str = r#"# Simple Theme Preset

A basic e-commerce theme with React components.

## Components
- Header with navigation and search
- Footer with company info
- Product grid layout

## Usage
Customize these components for your store!"#;

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn preset_has_five_fixed_entries() {
        let files = preset_files();
        let paths = files.iter().map(|f| f.path).collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec![
                "components/Header.tsx",
                "components/Footer.tsx",
                "components/ProductGrid.tsx",
                "styles/globals.css",
                "README.md",
            ]
        );
        for file in &files {
            assert!(!file.content.is_empty(), "{} is empty", file.path);
        }
    }

    #[test]
    fn preset_zip_round_trips() -> Result<()> {
        let bytes = build_preset_zip()?;
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        assert_eq!(archive.len(), preset_files().len());

        for file in preset_files() {
            let mut entry = archive.by_name(file.path)?;
            let mut content = String::new();
            entry.read_to_string(&mut content)?;
            assert_eq!(content, file.content);
        }
        Ok(())
    }
}
