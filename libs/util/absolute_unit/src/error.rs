// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use thiserror::Error;

/// A quantity argument was missing, not a number, or not of the required dimension.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid argument `{name}`: {reason}")]
pub struct InvalidArgument {
    name: &'static str,
    reason: String,
}

impl InvalidArgument {
    pub fn new<S: Into<String>>(name: &'static str, reason: S) -> Self {
        Self {
            name,
            reason: reason.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
